//! The full form-validation pass.

use crate::field::Field;
use crate::input::FormInput;
use crate::numeric::{parse_float_field, parse_int_field};
use crate::result::ValidationResult;

/// Validates one snapshot of the search form.
///
/// Runs two passes over a fresh [`ValidationResult`]:
///
/// 1. **Per-field**: each control is checked in isolation and marked or
///    cleared.
/// 2. **Cross-field**: each min/max pair (price, best-seller rank, reviews)
///    is compared. `min >= max` marks both ends; otherwise, when the pair's
///    guard holds, both ends are cleared — including a mark the per-field
///    pass just made. Last write wins, because the result is presented
///    per-field.
///
/// The overall flag latches false on the first mark, so a snapshot is valid
/// only when no check failed at any point in the run.
pub fn validate(input: &FormInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    checked(&mut result, Field::Categories, input.categories.is_empty());

    let min_price = parse_float_field(&input.min_price);
    let max_price = parse_float_field(&input.max_price);
    checked(&mut result, Field::MinPrice, min_price <= 0.0);
    checked(&mut result, Field::MaxPrice, max_price <= 0.0);

    let min_bsr = parse_int_field(&input.min_bsr);
    let max_bsr = parse_int_field(&input.max_bsr);
    checked(&mut result, Field::MinBsr, min_bsr < 0.0);
    checked(&mut result, Field::MaxBsr, max_bsr <= 0.0);

    let min_reviews = parse_int_field(&input.min_reviews);
    let max_reviews = parse_int_field(&input.max_reviews);
    checked(&mut result, Field::MinReviews, min_reviews < 0.0);
    checked(&mut result, Field::MaxReviews, max_reviews <= 0.0);

    let max_length = parse_float_field(&input.max_length);
    checked(&mut result, Field::MaxLength, max_length <= 0.0);

    let max_width = parse_float_field(&input.max_width);
    checked(&mut result, Field::MaxWidth, max_width <= 0.0);

    let max_height = parse_float_field(&input.max_height);
    checked(&mut result, Field::MaxHeight, max_height <= 0.0);

    let max_weight = parse_float_field(&input.max_weight);
    checked(&mut result, Field::MaxWeight, max_weight <= 0.0);

    let tolerance = parse_float_field(&input.tolerance);
    checked(
        &mut result,
        Field::Tolerance,
        tolerance < 0.0 || tolerance > 10.0,
    );

    // Cross-field pass. The clear branch runs even when the per-field pass
    // marked an end, so a pair that satisfies its guard ends the run clean.
    if min_price >= max_price {
        result.mark(Field::MinPrice);
        result.mark(Field::MaxPrice);
    } else if min_price > 0.0 && max_price > 0.0 {
        result.clear(Field::MinPrice);
        result.clear(Field::MaxPrice);
    }

    if min_bsr >= max_bsr {
        result.mark(Field::MinBsr);
        result.mark(Field::MaxBsr);
    } else if min_bsr >= 0.0 && max_bsr > 0.0 {
        result.clear(Field::MinBsr);
        result.clear(Field::MaxBsr);
    }

    if min_reviews >= max_reviews {
        result.mark(Field::MinReviews);
        result.mark(Field::MaxReviews);
    } else if min_reviews >= 0.0 && max_reviews > 0.0 {
        result.clear(Field::MinReviews);
        result.clear(Field::MaxReviews);
    }

    result
}

/// Marks the field when the check failed, clears it otherwise.
fn checked(result: &mut ValidationResult, field: Field, failed: bool) {
    if failed {
        result.mark(field);
    } else {
        result.clear(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    /// A snapshot that passes every check.
    fn good_input() -> FormInput {
        FormInput {
            categories: vec!["7".to_string()],
            min_price: "5".to_string(),
            max_price: "25".to_string(),
            min_bsr: "100".to_string(),
            max_bsr: "5000".to_string(),
            min_reviews: "0".to_string(),
            max_reviews: "300".to_string(),
            max_length: "18".to_string(),
            max_width: "14".to_string(),
            max_height: "8".to_string(),
            max_weight: "2.5".to_string(),
            tolerance: "5".to_string(),
        }
    }

    fn assert_flag_matches_set(result: &ValidationResult) {
        assert_eq!(result.is_valid(), result.invalid_fields().is_empty());
    }

    #[test]
    fn fully_filled_form_is_valid() {
        let result = validate(&good_input());
        assert!(result.is_valid());
        assert!(result.invalid_fields().is_empty());
    }

    #[test]
    fn empty_categories_fail() {
        let mut input = good_input();
        input.categories.clear();
        let result = validate(&input);
        assert!(!result.is_valid());
        assert!(result.is_field_invalid(Field::Categories));
        assert_eq!(result.invalid_fields().len(), 1);
        assert_flag_matches_set(&result);
    }

    #[test]
    fn one_selected_category_passes() {
        let mut input = good_input();
        input.categories = vec!["A".to_string()];
        assert!(!validate(&input).is_field_invalid(Field::Categories));
    }

    #[test]
    fn ordered_price_range_is_valid() {
        let mut input = good_input();
        input.min_price = "5".to_string();
        input.max_price = "10".to_string();
        let result = validate(&input);
        assert!(!result.is_field_invalid(Field::MinPrice));
        assert!(!result.is_field_invalid(Field::MaxPrice));
    }

    #[test]
    fn inverted_price_range_marks_both_ends() {
        let mut input = good_input();
        input.min_price = "10".to_string();
        input.max_price = "5".to_string();
        let result = validate(&input);
        assert!(!result.is_valid());
        assert!(result.is_field_invalid(Field::MinPrice));
        assert!(result.is_field_invalid(Field::MaxPrice));
        assert_flag_matches_set(&result);
    }

    #[test]
    fn zero_min_price_stays_marked() {
        // 0 <= 0 marks min-price, and the cross-field clear guard needs
        // min > 0, so the mark survives the second pass.
        let mut input = good_input();
        input.min_price = "0".to_string();
        input.max_price = "10".to_string();
        let result = validate(&input);
        assert!(result.is_field_invalid(Field::MinPrice));
        assert!(!result.is_field_invalid(Field::MaxPrice));
        assert_flag_matches_set(&result);
    }

    #[test]
    fn equal_price_bounds_mark_both_ends() {
        let mut input = good_input();
        input.min_price = "5".to_string();
        input.max_price = "5".to_string();
        let result = validate(&input);
        assert!(result.is_field_invalid(Field::MinPrice));
        assert!(result.is_field_invalid(Field::MaxPrice));
    }

    #[test]
    fn empty_min_bsr_stays_marked() {
        // Empty reads as the -1 sentinel, which fails the < 0 check; the
        // cross-field clear needs min >= 0, so the mark survives.
        let mut input = good_input();
        input.min_bsr = "".to_string();
        input.max_bsr = "100".to_string();
        let result = validate(&input);
        assert!(result.is_field_invalid(Field::MinBsr));
        assert!(!result.is_field_invalid(Field::MaxBsr));
        assert_flag_matches_set(&result);
    }

    #[test]
    fn zero_min_bsr_passes() {
        let mut input = good_input();
        input.min_bsr = "0".to_string();
        input.max_bsr = "100".to_string();
        let result = validate(&input);
        assert!(!result.is_field_invalid(Field::MinBsr));
    }

    #[test]
    fn inverted_review_range_marks_both_ends() {
        let mut input = good_input();
        input.min_reviews = "500".to_string();
        input.max_reviews = "100".to_string();
        let result = validate(&input);
        assert!(result.is_field_invalid(Field::MinReviews));
        assert!(result.is_field_invalid(Field::MaxReviews));
    }

    #[test]
    fn tolerance_bounds_are_inclusive() {
        let mut input = good_input();

        input.tolerance = "0".to_string();
        assert!(validate(&input).is_valid());

        input.tolerance = "10".to_string();
        assert!(validate(&input).is_valid());

        input.tolerance = "11".to_string();
        let result = validate(&input);
        assert!(!result.is_valid());
        assert!(result.is_field_invalid(Field::Tolerance));

        input.tolerance = "-0.5".to_string();
        assert!(validate(&input).is_field_invalid(Field::Tolerance));
    }

    #[test]
    fn empty_dimension_fails() {
        let mut input = good_input();
        input.max_height = "".to_string();
        let result = validate(&input);
        assert!(result.is_field_invalid(Field::MaxHeight));
        assert_flag_matches_set(&result);
    }

    #[test]
    fn garbage_min_price_slips_through() {
        // NaN fails no per-field comparison and never satisfies the
        // cross-field guard, so the snapshot validates. The typed layer is
        // where such input surfaces as a parse error.
        let mut input = good_input();
        input.min_price = "cheap".to_string();
        let result = validate(&input);
        assert!(result.is_valid());
        assert!(!result.is_field_invalid(Field::MinPrice));
        assert_flag_matches_set(&result);
    }

    #[test]
    fn empty_form_marks_every_field() {
        let result = validate(&FormInput::default());
        assert!(!result.is_valid());
        // Every numeric field reads the -1 sentinel: min bounds fail their
        // own checks, max bounds fail theirs, and -1 >= -1 marks each pair.
        for field in Field::ALL {
            assert!(result.is_field_invalid(field), "{field} should be marked");
        }
        assert_flag_matches_set(&result);
    }

    #[test]
    fn validation_is_idempotent() {
        let mut input = good_input();
        input.min_price = "0".to_string();
        input.max_bsr = "".to_string();
        assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn flag_agrees_with_set_across_fixtures() {
        let mut fixtures = vec![good_input(), FormInput::default()];
        let mut inverted = good_input();
        inverted.min_price = "10".to_string();
        inverted.max_price = "5".to_string();
        fixtures.push(inverted);
        let mut garbage = good_input();
        garbage.max_weight = "heavy".to_string();
        fixtures.push(garbage);

        for input in &fixtures {
            assert_flag_matches_set(&validate(input));
        }
    }
}
