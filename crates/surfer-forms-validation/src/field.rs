//! The fixed set of form fields the validator knows about.

use core::fmt;

/// One of the twelve search-form controls.
///
/// The variants are ordered the way the controls appear on the form, which
/// is also the order the per-field pass visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Field {
    Categories,
    MinPrice,
    MaxPrice,
    MinBsr,
    MaxBsr,
    MinReviews,
    MaxReviews,
    MaxLength,
    MaxWidth,
    MaxHeight,
    MaxWeight,
    Tolerance,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 12] = [
        Field::Categories,
        Field::MinPrice,
        Field::MaxPrice,
        Field::MinBsr,
        Field::MaxBsr,
        Field::MinReviews,
        Field::MaxReviews,
        Field::MaxLength,
        Field::MaxWidth,
        Field::MaxHeight,
        Field::MaxWeight,
        Field::Tolerance,
    ];

    /// The kebab-case id of the form control this field reads from.
    pub fn control_name(&self) -> &'static str {
        match self {
            Field::Categories => "categories",
            Field::MinPrice => "min-price",
            Field::MaxPrice => "max-price",
            Field::MinBsr => "min-bsr",
            Field::MaxBsr => "max-bsr",
            Field::MinReviews => "min-reviews",
            Field::MaxReviews => "max-reviews",
            Field::MaxLength => "max-length",
            Field::MaxWidth => "max-width",
            Field::MaxHeight => "max-height",
            Field::MaxWeight => "max-weight",
            Field::Tolerance => "tolerance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_names_match_form_ids() {
        assert_eq!(Field::MinPrice.control_name(), "min-price");
        assert_eq!(Field::MaxBsr.control_name(), "max-bsr");
        assert_eq!(Field::Tolerance.control_name(), "tolerance");
    }

    #[test]
    fn all_lists_every_field_once() {
        assert_eq!(Field::ALL.len(), 12);
        for (i, a) in Field::ALL.iter().enumerate() {
            for b in &Field::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_uses_control_name() {
        assert_eq!(alloc::format!("{}", Field::MinReviews), "min-reviews");
    }
}
