//! Surfer Forms Validation Core
//!
//! Pure Rust validation for the product-search form, compatible with both
//! std and no_std environments. The same pass runs server-side and inside
//! WASM client-side validation, so a browser and a backend agree on which
//! fields get flagged.
//!
//! The form is a fixed set of controls: a category multi-select plus numeric
//! range filters (price, best-seller rank, review count, dimensions, weight,
//! and a tolerance percentage). [`validate`] takes a raw snapshot of those
//! controls and reports which fields a renderer should mark invalid.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod field;
pub mod form;
pub mod input;
pub mod numeric;
pub mod result;

// Re-export the public surface
pub use field::Field;
pub use form::validate;
pub use input::FormInput;
pub use numeric::{parse_float_field, parse_int_field, EMPTY_SENTINEL};
pub use result::ValidationResult;
