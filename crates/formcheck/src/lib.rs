//! # formcheck
//!
//! Validation state for a single form input.
//!
//! A [`Field`] holds a value plus a set of rules resolved once from an
//! ordered list of [`Operator`]s. Every assignment re-validates, so the
//! field's [`errors`](Field::errors) always describe its current value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//!
//! let mut email = Field::new("", [Operator::Required, Operator::Email])?;
//! let mut name = Field::new("", [Operator::Required, Operator::MaxLength(40)])?;
//!
//! email.set_value("  ada@example.com\n");
//! name.set_value("Ada");
//!
//! assert_eq!(email.value(), "ada@example.com");
//! assert!([email, name].is_valid());
//! ```
//!
//! ## Rules
//!
//! - An empty, optional value is always valid.
//! - An empty, required value fails with [`ValidationError::Required`] only.
//! - Otherwise minimum length, maximum length, the custom predicate and the
//!   pattern are all checked, in that order, and every failure is recorded.
//! - Patterns match the whole value, never a substring.
//! - Leading and trailing whitespace is stripped on assignment unless
//!   [`Operator::DisableTrimming`] is given.
//!
//! Rule sets can also be loaded from JSON through [`FieldSchema`].

pub mod collection;
pub mod config;
pub mod error;
pub mod field;
pub mod operator;
pub mod pattern;
pub mod prelude;
pub mod schema;

pub use collection::{FieldCollection, all_valid};
pub use config::{FieldConfig, FieldConfigBuilder};
pub use error::{FieldError, ValidationError};
pub use field::Field;
pub use operator::{CustomHandler, Operator};
pub use pattern::{DefaultPattern, Pattern};
pub use schema::{FieldSchema, FieldSchemaError, RuleSpec};
