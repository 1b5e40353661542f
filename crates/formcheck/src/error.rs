//! Error types
//!
//! Two kinds of failure live here:
//!
//! - [`ValidationError`]: a rule the current value does not satisfy. These
//!   are ordinary data, accumulated on a [`Field`](crate::Field) and never
//!   returned as `Err`.
//! - [`FieldError`]: a misconfigured rule set, reported once when a field or
//!   [`FieldConfig`](crate::FieldConfig) is built.

use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed rule on a field's current value.
///
/// Carries no field reference; callers correlate by field identity and
/// render their own messages from [`code`](Self::code). The length variants
/// hold the *observed* character count, not the configured bound.
///
/// Serializes as `{"code": "min_length", "actual": 3}`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
#[serde(tag = "code", content = "actual", rename_all = "snake_case")]
pub enum ValidationError {
    /// The field is required and the value is empty.
    #[error("value is required")]
    Required,

    /// The value does not match the configured pattern as a whole.
    #[error("value does not match the expected pattern")]
    Pattern,

    /// The value is shorter than the configured minimum.
    #[error("value is too short ({0} characters)")]
    MinLength(usize),

    /// The value is longer than the configured maximum.
    #[error("value is too long ({0} characters)")]
    MaxLength(usize),

    /// The custom predicate rejected the value.
    #[error("value was rejected by custom validation")]
    Custom,
}

impl ValidationError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern => "pattern",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::Custom => "custom",
        }
    }

    /// The observed length carried by length errors.
    #[must_use]
    pub fn actual_length(&self) -> Option<usize> {
        match self {
            Self::MinLength(actual) | Self::MaxLength(actual) => Some(*actual),
            _ => None,
        }
    }
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// Error raised while resolving operators into a field configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// A pattern operator carries a source string that does not compile.
    ///
    /// `index` is the operator's position in the sequence it was given in.
    #[error("operator #{index}: invalid pattern `{pattern}`")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl FieldError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "FIELD_INVALID_PATTERN",
        }
    }
}
