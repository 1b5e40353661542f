//! Serializable field definitions
//!
//! [`RuleSpec`] mirrors [`Operator`] for every directive that can be written
//! down as data, so rule sets can live in JSON next to the rest of an
//! application's configuration. Custom predicates are closures and have no
//! serialized form; attach them with [`FieldSchema::build_with`].

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::Field;
use crate::operator::Operator;

/// Error loading a field from its serialized definition.
#[derive(Debug, thiserror::Error)]
pub enum FieldSchemaError {
    /// The definition is not valid JSON or has the wrong shape.
    #[error("invalid field schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The rules parsed but do not resolve into a configuration.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// A declarative rule, as stored in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleSpec {
    Required,
    Pattern { pattern: String },
    MinLength { length: usize },
    MaxLength { length: usize },
    Email,
    PhoneNumber,
    UrlNoScheme,
    UrlWithScheme,
    DisableTrimming,
}

impl From<RuleSpec> for Operator {
    fn from(spec: RuleSpec) -> Self {
        match spec {
            RuleSpec::Required => Self::Required,
            RuleSpec::Pattern { pattern } => Self::Pattern(pattern),
            RuleSpec::MinLength { length } => Self::MinLength(length),
            RuleSpec::MaxLength { length } => Self::MaxLength(length),
            RuleSpec::Email => Self::Email,
            RuleSpec::PhoneNumber => Self::PhoneNumber,
            RuleSpec::UrlNoScheme => Self::UrlNoScheme,
            RuleSpec::UrlWithScheme => Self::UrlWithScheme,
            RuleSpec::DisableTrimming => Self::DisableTrimming,
        }
    }
}

/// A field's initial value and rules.
///
/// ```json
/// {
///   "initial": "",
///   "rules": [
///     { "rule": "required" },
///     { "rule": "min_length", "length": 3 },
///     { "rule": "email" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub initial: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleSpec>,
}

impl FieldSchema {
    pub fn from_json(json: &str) -> Result<Self, FieldSchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a definition and builds the field in one step.
    pub fn load(json: &str) -> Result<Field, FieldSchemaError> {
        Ok(Self::from_json(json)?.build()?)
    }

    /// The rules as operators, in declaration order.
    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.rules.iter().cloned().map(Operator::from)
    }

    pub fn config(&self) -> Result<FieldConfig, FieldError> {
        FieldConfig::resolve(self.operators())
    }

    pub fn build(&self) -> Result<Field, FieldError> {
        self.build_with(std::iter::empty::<Operator>())
    }

    /// Builds the field with `extra` operators appended after the declared
    /// rules, so they take precedence for any slot both configure.
    pub fn build_with<I>(&self, extra: I) -> Result<Field, FieldError>
    where
        I: IntoIterator<Item = Operator>,
    {
        Field::new(self.initial.clone(), self.operators().chain(extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn rule_tags_are_snake_case() {
        let json = serde_json::to_string(&RuleSpec::MinLength { length: 5 }).unwrap();
        assert_eq!(json, r#"{"rule":"min_length","length":5}"#);

        let json = serde_json::to_string(&RuleSpec::UrlNoScheme).unwrap();
        assert_eq!(json, r#"{"rule":"url_no_scheme"}"#);
    }

    #[test]
    fn defaults_when_fields_missing() {
        let schema = FieldSchema::from_json("{}").unwrap();
        assert_eq!(schema, FieldSchema::default());
    }

    #[test]
    fn builds_field_from_json() {
        let mut field = FieldSchema::load(
            r#"{"rules":[{"rule":"required"},{"rule":"pattern","pattern":"[a-z]+"}]}"#,
        )
        .unwrap();
        assert_eq!(field.errors(), &[ValidationError::Required]);

        field.set_value("ABC");
        assert_eq!(field.errors(), &[ValidationError::Pattern]);
    }

    #[test]
    fn unknown_rule_is_a_json_error() {
        let err = FieldSchema::from_json(r#"{"rules":[{"rule":"bogus"}]}"#).unwrap_err();
        assert!(matches!(err, FieldSchemaError::Json(_)));
    }

    #[test]
    fn bad_pattern_is_a_field_error() {
        let err =
            FieldSchema::load(r#"{"rules":[{"rule":"pattern","pattern":"("}]}"#).unwrap_err();
        assert!(matches!(err, FieldSchemaError::Field(FieldError::InvalidPattern { .. })));
    }

    #[test]
    fn extra_operators_come_last() {
        let schema = FieldSchema {
            initial: "Bar".into(),
            rules: vec![RuleSpec::MinLength { length: 10 }],
        };
        let field = schema
            .build_with([Operator::MinLength(1), Operator::custom(|v| v == "Foo")])
            .unwrap();
        assert_eq!(field.min_length(), Some(1));
        assert_eq!(field.errors(), &[ValidationError::Custom]);
    }
}
