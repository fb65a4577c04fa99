//! Raw form snapshot.

use alloc::string::String;
use alloc::vec::Vec;

/// A snapshot of the search form, taken at call time.
///
/// Values are kept exactly as the controls hold them: raw strings, possibly
/// empty, with no parsing at construction. The serde names match the form
/// control ids, so a front end can post the snapshot as-is.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct FormInput {
    /// Selected category values from the multi-select. May be empty.
    pub categories: Vec<String>,
    pub min_price: String,
    pub max_price: String,
    pub min_bsr: String,
    pub max_bsr: String,
    pub min_reviews: String,
    pub max_reviews: String,
    pub max_length: String,
    pub max_width: String,
    pub max_height: String,
    pub max_weight: String,
    pub tolerance: String,
}
