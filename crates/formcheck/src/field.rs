//! The field engine
//!
//! A [`Field`] owns a value and a resolved [`FieldConfig`]. Every change to
//! the value goes through [`Field::set_value`], which marks the field as
//! touched, normalises the input and re-runs validation, so
//! [`Field::errors`] always describes the current value.

use crate::config::FieldConfig;
use crate::error::{FieldError, ValidationError};
use crate::operator::Operator;

/// A single form input with its validation state.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::prelude::*;
///
/// let mut field = Field::new("", [Operator::Required, Operator::MinLength(3)])?;
/// assert!(!field.is_valid());
///
/// field.set_value("Al");
/// assert_eq!(field.errors(), &[ValidationError::MinLength(2)]);
///
/// field.set_value("Alice  ");
/// assert_eq!(field.value(), "Alice");
/// assert!(field.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Field {
    value: String,
    config: FieldConfig,
    touched: bool,
    errors: Vec<ValidationError>,
}

impl Field {
    /// Creates a field from an initial value and an operator sequence.
    ///
    /// Fails only when a pattern operator does not compile.
    pub fn new<I>(initial: impl Into<String>, operators: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = Operator>,
    {
        let config = FieldConfig::resolve(operators)?;
        Ok(Self::with_config(initial, config))
    }

    /// Creates a field backed by an already resolved configuration.
    ///
    /// A non-empty initial value marks the field as touched. The initial
    /// value is normalised and validated like any later assignment.
    #[must_use]
    pub fn with_config(initial: impl Into<String>, config: FieldConfig) -> Self {
        let initial = initial.into();
        let touched = !initial.is_empty();
        let mut field = Self {
            value: config.normalize(initial),
            config,
            touched,
            errors: Vec::new(),
        };
        field.validate();
        field
    }

    /// Replaces the value.
    ///
    /// Assigning the current value again is a no-op. Otherwise a non-empty
    /// value marks the field as touched, surrounding whitespace is stripped
    /// (unless trimming is disabled) and the errors are recomputed.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            tracing::trace!("value unchanged, skipping validation");
            return;
        }

        if !value.is_empty() {
            self.touched = true;
        }

        self.value = self.config.normalize(value);
        self.validate();
    }

    fn validate(&mut self) {
        self.errors = self.config.evaluate(&self.value);
        tracing::trace!(
            errors = self.errors.len(),
            touched = self.touched,
            "validated field"
        );
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the field and returns its value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Failures for the current value, in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether the value has ever been non-empty.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Whether the current value passes every rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.config.is_required() && self.value.is_empty() {
            return false;
        }
        self.errors.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.config.is_required()
    }

    #[must_use]
    pub fn min_length(&self) -> Option<usize> {
        self.config.min_length()
    }

    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.config.max_length()
    }

    /// The configured pattern source, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.config.pattern()
    }

    #[must_use]
    pub fn disable_trimming(&self) -> bool {
        self.config.disable_trimming()
    }

    #[must_use]
    pub fn has_custom_handler(&self) -> bool {
        self.config.has_custom_handler()
    }
}
