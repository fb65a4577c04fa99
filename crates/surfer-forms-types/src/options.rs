//! Typed search options built from a validated form snapshot.

use std::collections::BTreeSet;
use std::num::{ParseFloatError, ParseIntError};

use serde::Serialize;
use thiserror::Error;

use surfer_forms_validation::{validate, Field, FormInput};

use crate::category::Category;
use crate::{
    DimensionIn, DimensionInError, Price, PriceError, ReviewCount, SellerRank, TolerancePct,
    TolerancePctError, WeightLb, WeightLbError,
};

/// Why a snapshot could not be turned into [`SearchOptions`].
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The snapshot failed form validation; the offending fields are listed.
    #[error("form failed validation: {0:?}")]
    InvalidForm(BTreeSet<Field>),
    /// A field validated but does not parse as a float. Reachable because
    /// unparseable text slips through the form pass as NaN.
    #[error("{field}: not a number: {source}")]
    ParseFloat {
        field: Field,
        source: ParseFloatError,
    },
    /// An integer field validated but does not fit a u32.
    #[error("{field}: not a whole number: {source}")]
    ParseInt { field: Field, source: ParseIntError },
    /// A selected category value is not in the catalog.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
    #[error("{field}: {source}")]
    Price { field: Field, source: PriceError },
    #[error("{field}: {source}")]
    Dimension {
        field: Field,
        source: DimensionInError,
    },
    #[error("max-weight: {0}")]
    Weight(#[from] WeightLbError),
    #[error("tolerance: {0}")]
    Tolerance(#[from] TolerancePctError),
}

/// The fully typed filter set the product crawler runs with.
///
/// Only obtainable from a snapshot that passed [`validate`], so every bound
/// carries its domain rule in its type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOptions {
    pub categories: Vec<Category>,
    pub min_price: Price,
    pub max_price: Price,
    pub min_bsr: SellerRank,
    pub max_bsr: SellerRank,
    pub min_reviews: ReviewCount,
    pub max_reviews: ReviewCount,
    pub max_length: DimensionIn,
    pub max_width: DimensionIn,
    pub max_height: DimensionIn,
    pub max_weight: WeightLb,
    pub tolerance: TolerancePct,
}

impl SearchOptions {
    /// Converts a raw snapshot into typed options.
    ///
    /// Runs the form validation pass first and refuses snapshots it rejects.
    /// The remaining failure modes are the ones the form pass lets through:
    /// unparseable text (NaN slips past the range checks) and values outside
    /// a newtype's domain (e.g. an infinite price).
    pub fn from_input(input: &FormInput) -> Result<Self, OptionsError> {
        let report = validate(input);
        if !report.is_valid() {
            return Err(OptionsError::InvalidForm(report.invalid_fields().clone()));
        }

        let categories = input
            .categories
            .iter()
            .map(|value| {
                value
                    .parse::<u8>()
                    .ok()
                    .and_then(Category::by_id)
                    .ok_or_else(|| OptionsError::UnknownCategory(value.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchOptions {
            categories,
            min_price: price_field(&input.min_price, Field::MinPrice)?,
            max_price: price_field(&input.max_price, Field::MaxPrice)?,
            min_bsr: SellerRank::new(int_field(&input.min_bsr, Field::MinBsr)?),
            max_bsr: SellerRank::new(int_field(&input.max_bsr, Field::MaxBsr)?),
            min_reviews: ReviewCount::new(int_field(&input.min_reviews, Field::MinReviews)?),
            max_reviews: ReviewCount::new(int_field(&input.max_reviews, Field::MaxReviews)?),
            max_length: dimension_field(&input.max_length, Field::MaxLength)?,
            max_width: dimension_field(&input.max_width, Field::MaxWidth)?,
            max_height: dimension_field(&input.max_height, Field::MaxHeight)?,
            max_weight: WeightLb::try_new(float_field(&input.max_weight, Field::MaxWeight)?)?,
            tolerance: TolerancePct::try_new(float_field(&input.tolerance, Field::Tolerance)?)?,
        })
    }

    /// The maximum package volume in cubic inches, length x width x height.
    pub fn max_volume(&self) -> f64 {
        self.max_length.into_inner() * self.max_width.into_inner() * self.max_height.into_inner()
    }
}

fn float_field(raw: &str, field: Field) -> Result<f64, OptionsError> {
    raw.parse::<f64>()
        .map_err(|source| OptionsError::ParseFloat { field, source })
}

fn int_field(raw: &str, field: Field) -> Result<u32, OptionsError> {
    raw.parse::<u32>()
        .map_err(|source| OptionsError::ParseInt { field, source })
}

fn price_field(raw: &str, field: Field) -> Result<Price, OptionsError> {
    Price::try_new(float_field(raw, field)?)
        .map_err(|source| OptionsError::Price { field, source })
}

fn dimension_field(raw: &str, field: Field) -> Result<DimensionIn, OptionsError> {
    DimensionIn::try_new(float_field(raw, field)?)
        .map_err(|source| OptionsError::Dimension { field, source })
}
