//! Numeric parsing rules for raw form values.
//!
//! The form hands over raw strings. An empty control stands for "no value"
//! and becomes [`EMPTY_SENTINEL`] so it fails the range checks uniformly.
//! Text that does not parse becomes `NaN`; every ordered comparison against
//! `NaN` is false, so such a value slips past the per-field checks and never
//! satisfies a cross-field clear. That is the historical behavior of the
//! form and is preserved here on purpose.

/// Stand-in for an empty numeric control.
pub const EMPTY_SENTINEL: f64 = -1.0;

/// Parses a float-valued control (prices, dimensions, weight, tolerance).
pub fn parse_float_field(raw: &str) -> f64 {
    if raw.is_empty() {
        return EMPTY_SENTINEL;
    }
    raw.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses an integer-valued control (best-seller rank, review counts).
///
/// Integer fields go through `f64` as well so that garbage degrades to `NaN`
/// exactly like the float fields; a successful parse is truncated toward
/// zero, so "12.5" reads as 12.
pub fn parse_int_field(raw: &str) -> f64 {
    if raw.is_empty() {
        return EMPTY_SENTINEL;
    }
    raw.parse::<f64>().map(f64::trunc).unwrap_or(f64::NAN)
}
