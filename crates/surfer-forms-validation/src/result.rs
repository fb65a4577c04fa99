//! Per-run validation outcome.

use alloc::collections::BTreeSet;

use crate::field::Field;

/// The outcome of one validation run.
///
/// A fresh result is built per call; nothing persists between runs. Fields
/// are marked and cleared as the passes execute, and the final set is what a
/// presentation layer styles. The overall `valid` flag latches false on the
/// first mark and stays false for the rest of the run, even if a later
/// cross-field clear removes the mark from the set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    valid: bool,
    invalid_fields: BTreeSet<Field>,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        ValidationResult {
            valid: true,
            invalid_fields: BTreeSet::new(),
        }
    }

    /// Flags a field and latches the overall result invalid.
    pub(crate) fn mark(&mut self, field: Field) {
        self.valid = false;
        self.invalid_fields.insert(field);
    }

    /// Removes a field's mark. Does not touch the latched flag.
    pub(crate) fn clear(&mut self, field: Field) {
        self.invalid_fields.remove(&field);
    }

    /// True when no check failed during the run.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The fields a renderer should mark invalid, in form order.
    pub fn invalid_fields(&self) -> &BTreeSet<Field> {
        &self.invalid_fields
    }

    /// Whether this specific field ended the run marked invalid.
    pub fn is_field_invalid(&self, field: Field) -> bool {
        self.invalid_fields.contains(&field)
    }
}
