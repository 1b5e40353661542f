//! Resolved field configuration
//!
//! [`FieldConfig`] is the flat, immutable form of an operator sequence.
//! Resolution is a single left-to-right pass: value slots are overwritten by
//! later operators, flags only ever turn on. Pattern sources are compiled
//! during the pass, so a bad source surfaces here rather than at validation
//! time.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{FieldError, ValidationError};
use crate::operator::{CustomHandler, Operator};
use crate::pattern::{DefaultPattern, Pattern};

// ============================================================================
// FIELD CONFIG
// ============================================================================

/// The validation rules and input behaviour of a field.
///
/// Cloning is cheap: the compiled pattern and the custom handler are shared.
#[derive(Clone, Default)]
pub struct FieldConfig {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Pattern>,
    custom: Option<CustomHandler>,
    disable_trimming: bool,
}

impl FieldConfig {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> FieldConfigBuilder {
        FieldConfigBuilder::default()
    }

    /// Resolves an operator sequence in one pass.
    pub fn resolve<I>(operators: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = Operator>,
    {
        Self::builder().operators(operators).build()
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// The configured pattern source, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Pattern::source)
    }

    #[must_use]
    pub fn disable_trimming(&self) -> bool {
        self.disable_trimming
    }

    #[must_use]
    pub fn has_custom_handler(&self) -> bool {
        self.custom.is_some()
    }

    /// Applies the input normalisation: strips surrounding whitespace and
    /// newlines unless trimming is disabled.
    #[must_use]
    pub fn normalize(&self, value: String) -> String {
        if self.disable_trimming {
            return value;
        }
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_owned()
        }
    }

    /// Runs every rule against `value` and returns the failures in order.
    ///
    /// An empty optional value passes outright. An empty required value
    /// fails with `Required` alone. Otherwise min length, max length, the
    /// custom handler and the pattern are each checked, in that order,
    /// without stopping early. Lengths count user-perceived characters
    /// (extended grapheme clusters), so `"e\u{301}"` has length 1.
    #[must_use]
    pub fn evaluate(&self, value: &str) -> Vec<ValidationError> {
        if value.is_empty() {
            return if self.required {
                vec![ValidationError::Required]
            } else {
                Vec::new()
            };
        }

        let mut errors = Vec::new();
        let length = value.graphemes(true).count();

        if let Some(min) = self.min_length
            && length < min
        {
            errors.push(ValidationError::MinLength(length));
        }

        if let Some(max) = self.max_length
            && length > max
        {
            errors.push(ValidationError::MaxLength(length));
        }

        if let Some(custom) = &self.custom
            && !custom(value)
        {
            errors.push(ValidationError::Custom);
        }

        if let Some(pattern) = &self.pattern
            && !pattern.matches(value)
        {
            errors.push(ValidationError::Pattern);
        }

        errors
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern())
            .field("custom", &self.custom.is_some())
            .field("disable_trimming", &self.disable_trimming)
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects operators and resolves them into a [`FieldConfig`].
///
/// ```rust,ignore
/// let config = FieldConfig::builder()
///     .required()
///     .min_length(3)
///     .email()
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldConfigBuilder {
    operators: Vec<Operator>,
}

impl FieldConfigBuilder {
    /// Appends one operator.
    #[must_use]
    pub fn operator(mut self, operator: Operator) -> Self {
        self.operators.push(operator);
        self
    }

    /// Appends operators in order.
    #[must_use]
    pub fn operators<I>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = Operator>,
    {
        self.operators.extend(operators);
        self
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.operator(Operator::Required)
    }

    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.operator(Operator::MinLength(min))
    }

    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.operator(Operator::MaxLength(max))
    }

    #[must_use]
    pub fn pattern(self, source: impl Into<String>) -> Self {
        self.operator(Operator::pattern(source))
    }

    #[must_use]
    pub fn email(self) -> Self {
        self.operator(Operator::Email)
    }

    #[must_use]
    pub fn phone_number(self) -> Self {
        self.operator(Operator::PhoneNumber)
    }

    #[must_use]
    pub fn url_no_scheme(self) -> Self {
        self.operator(Operator::UrlNoScheme)
    }

    #[must_use]
    pub fn url_with_scheme(self) -> Self {
        self.operator(Operator::UrlWithScheme)
    }

    #[must_use]
    pub fn disable_trimming(self) -> Self {
        self.operator(Operator::DisableTrimming)
    }

    #[must_use]
    pub fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.operator(Operator::custom(predicate))
    }

    /// Resolves the collected operators.
    ///
    /// Fails on the first pattern operator whose source does not compile,
    /// even when a later operator would have replaced it.
    pub fn build(self) -> Result<FieldConfig, FieldError> {
        let mut config = FieldConfig::default();

        for (index, operator) in self.operators.into_iter().enumerate() {
            tracing::trace!(index, operator = operator.name(), "applying operator");
            match operator {
                Operator::Required => config.required = true,
                Operator::DisableTrimming => config.disable_trimming = true,
                Operator::MinLength(min) => config.min_length = Some(min),
                Operator::MaxLength(max) => config.max_length = Some(max),
                Operator::Custom(handler) => config.custom = Some(handler),
                Operator::Pattern(source) => {
                    let pattern = Pattern::new(source.as_str()).map_err(|source_err| {
                        tracing::debug!(
                            index,
                            operator = "pattern",
                            pattern = %source,
                            error = %source_err,
                            "pattern operator does not compile"
                        );
                        FieldError::InvalidPattern {
                            index,
                            pattern: source,
                            source: source_err,
                        }
                    })?;
                    config.pattern = Some(pattern);
                }
                Operator::Email => config.pattern = Some(builtin(index, DefaultPattern::Email)?),
                Operator::PhoneNumber => {
                    config.pattern = Some(builtin(index, DefaultPattern::Phone)?);
                }
                Operator::UrlNoScheme => {
                    config.pattern = Some(builtin(index, DefaultPattern::UrlNoScheme)?);
                }
                Operator::UrlWithScheme => {
                    config.pattern = Some(builtin(index, DefaultPattern::UrlWithScheme)?);
                }
            }
        }

        tracing::debug!(
            required = config.required,
            min_length = ?config.min_length,
            max_length = ?config.max_length,
            pattern = ?config.pattern(),
            custom = config.custom.is_some(),
            disable_trimming = config.disable_trimming,
            "resolved field configuration"
        );

        Ok(config)
    }
}

fn builtin(index: usize, kind: DefaultPattern) -> Result<Pattern, FieldError> {
    Pattern::builtin(kind).map_err(|source| FieldError::InvalidPattern {
        index,
        pattern: kind.source().to_owned(),
        source,
    })
}
