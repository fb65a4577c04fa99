//! Validated search-option types with embedded domain rules
//!
//! The raw form snapshot ([`surfer_forms_validation::FormInput`]) is strings
//! all the way down. Once [`surfer_forms_validation::validate`] accepts a
//! snapshot, this crate turns it into typed values using `nutype` newtype
//! wrappers, so the crawler side of the system never sees a price of zero or
//! a tolerance of 40%.
//!
//! # Philosophy: the type is the rule
//!
//! Instead of re-checking "price must be positive" at every consumer, a
//! [`Price`] cannot be constructed from a non-positive value. Construction is
//! the validation.
//!
//! # WASM Compatibility
//!
//! All types serialize with serde and validate at construction time, so the
//! same types work server-side and in WebAssembly clients.

use nutype::nutype;

pub mod category;
pub mod options;

pub use category::Category;
pub use options::{OptionsError, SearchOptions};

/// A price bound in dollars. Finite and strictly positive.
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, TryFrom, Into, Display, Serialize, Deserialize)
)]
pub struct Price(f64);

/// A best-seller rank bound. Rank 0 is allowed as a lower bound.
#[nutype(derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRef, From, Into, Display,
    Serialize, Deserialize
))]
pub struct SellerRank(u32);

/// A review-count bound.
#[nutype(derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRef, From, Into, Display,
    Serialize, Deserialize
))]
pub struct ReviewCount(u32);

/// A package dimension in inches. Finite and strictly positive.
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, TryFrom, Into, Display, Serialize, Deserialize)
)]
pub struct DimensionIn(f64);

/// A package weight in pounds. Finite and strictly positive.
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, TryFrom, Into, Display, Serialize, Deserialize)
)]
pub struct WeightLb(f64);

/// The match tolerance percentage. Finite, between 0 and 10 inclusive.
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 10.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, TryFrom, Into, Display, Serialize, Deserialize)
)]
pub struct TolerancePct(f64);
