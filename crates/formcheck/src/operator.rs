//! Field operators
//!
//! An [`Operator`] is one configuration directive. A field takes an ordered
//! sequence of them once, at construction, and resolves it into a
//! [`FieldConfig`](crate::FieldConfig).

use std::fmt;
use std::sync::Arc;

/// A caller-supplied predicate over the field's current value.
///
/// Invoked synchronously on every validation run; it should be cheap and
/// free of side effects.
pub type CustomHandler = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// One validation or input directive for a field.
///
/// For slots that take a value (`MinLength`, `MaxLength`, the pattern family,
/// `Custom`) the last occurrence in a sequence wins. `Email`, `PhoneNumber`,
/// `UrlNoScheme` and `UrlWithScheme` all write the same pattern slot as
/// `Pattern`. `Required` and `DisableTrimming` are flags: once set they stay
/// set.
#[derive(Clone)]
pub enum Operator {
    /// Empty values are rejected.
    Required,
    /// The whole value must match this regular expression.
    Pattern(String),
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// Built-in email pattern.
    Email,
    /// Built-in phone number pattern.
    PhoneNumber,
    /// Built-in URL pattern without a scheme (`example.com/path`).
    UrlNoScheme,
    /// Built-in URL pattern with a scheme (`https://example.com`).
    UrlWithScheme,
    /// Keep leading and trailing whitespace instead of stripping it.
    DisableTrimming,
    /// Caller-supplied predicate.
    Custom(CustomHandler),
}

impl Operator {
    /// Require the whole value to match `source`.
    #[must_use]
    pub fn pattern(source: impl Into<String>) -> Self {
        Self::Pattern(source.into())
    }

    /// Wrap a boolean predicate.
    #[must_use]
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Wrap a fallible check. An `Err` counts as a failed predicate.
    #[must_use]
    pub fn try_custom<F, E>(check: F) -> Self
    where
        F: Fn(&str) -> Result<(), E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Self::custom(move |value| match check(value) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(%error, "custom check rejected value");
                false
            }
        })
    }

    /// Short name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern(_) => "pattern",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::UrlNoScheme => "url_no_scheme",
            Self::UrlWithScheme => "url_with_scheme",
            Self::DisableTrimming => "disable_trimming",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(source) => f.debug_tuple("Pattern").field(source).finish(),
            Self::MinLength(n) => f.debug_tuple("MinLength").field(n).finish(),
            Self::MaxLength(n) => f.debug_tuple("MaxLength").field(n).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Required => f.write_str("Required"),
            Self::Email => f.write_str("Email"),
            Self::PhoneNumber => f.write_str("PhoneNumber"),
            Self::UrlNoScheme => f.write_str("UrlNoScheme"),
            Self::UrlWithScheme => f.write_str("UrlWithScheme"),
            Self::DisableTrimming => f.write_str("DisableTrimming"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_wraps_predicate() {
        let op = Operator::custom(|v| v == "Foo");
        match op {
            Operator::Custom(handler) => {
                assert!(handler("Foo"));
                assert!(!handler("Bar"));
            }
            other => panic!("expected Custom, got {other:?}"),
        }
    }

    #[test]
    fn try_custom_treats_err_as_failure() {
        let op = Operator::try_custom(|v: &str| {
            v.parse::<u16>().map(|_| ()).map_err(|e| e.to_string())
        });
        let Operator::Custom(handler) = op else {
            panic!("expected Custom");
        };
        assert!(handler("8080"));
        assert!(!handler("not a port"));
        assert!(!handler("70000"));
    }

    #[test]
    fn debug_hides_closure() {
        assert_eq!(format!("{:?}", Operator::custom(|_| true)), "Custom(..)");
        assert_eq!(
            format!("{:?}", Operator::pattern("[a-z]+")),
            r#"Pattern("[a-z]+")"#
        );
        assert_eq!(format!("{:?}", Operator::MinLength(3)), "MinLength(3)");
    }

    #[test]
    fn names() {
        assert_eq!(Operator::Required.name(), "required");
        assert_eq!(Operator::PhoneNumber.name(), "phone_number");
        assert_eq!(Operator::custom(|_| true).name(), "custom");
    }
}
