//! # surfer-forms
//!
//! Form validation, typed search options, and UI-state helpers for a
//! product-search front end: a category multi-select plus numeric range
//! filters for price, best-seller rank, review count, package dimensions,
//! weight, and a match tolerance.
//!
//! ## Quick Start
//!
//! ```rust
//! use surfer_forms::{validate, Field, FormInput};
//!
//! let mut snapshot = FormInput::default();
//! snapshot.categories = vec!["7".to_string()];
//! snapshot.min_price = "10".to_string();
//! snapshot.max_price = "5".to_string();
//!
//! let report = validate(&snapshot);
//! assert!(!report.is_valid());
//! assert!(report.is_field_invalid(Field::MinPrice));
//! assert!(report.is_field_invalid(Field::MaxPrice));
//! ```
//!
//! The report is pure data: a presentation layer decides how flagged fields
//! look and whether the search action is enabled. [`state`] carries the rest
//! of that UI surface — the idle/searching phase machine and the results
//! table — also as pure data.
//!
//! ## Architecture
//!
//! This crate is a convenience wrapper over the component crates:
//!
//! - **`surfer-forms-validation`** — the validation pass (no_std compatible)
//! - **`surfer-forms-types`** — nutype-validated search options and the
//!   category catalog (enable the `types` feature)
//!
//! Most users should use this parent crate. Advanced users can depend on the
//! components directly for fine-grained control.

// Re-export the validation pass and its data model
pub use surfer_forms_validation::{validate, Field, FormInput, ValidationResult};

// Re-export validation module for access to the parsing helpers
pub use surfer_forms_validation as validation;

// Re-export the typed layer (if feature enabled)
#[cfg(feature = "types")]
pub use surfer_forms_types as types;

pub mod state;
