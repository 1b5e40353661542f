//! Validity over a group of fields.

use crate::field::Field;

/// Whether none of the fields carries an error.
///
/// Looks at each field's error list rather than [`Field::is_valid`]. An
/// optional empty field has no errors and counts as valid; a required empty
/// field always carries `Required` and does not.
#[must_use]
pub fn all_valid<'a, I>(fields: I) -> bool
where
    I: IntoIterator<Item = &'a Field>,
{
    fields.into_iter().all(|field| field.errors().is_empty())
}

/// Aggregate validity on slices, arrays and vectors of fields.
pub trait FieldCollection {
    /// Whether every field in the collection is free of errors.
    #[must_use]
    fn is_valid(&self) -> bool;
}

impl FieldCollection for [Field] {
    fn is_valid(&self) -> bool {
        all_valid(self)
    }
}
