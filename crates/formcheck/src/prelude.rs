//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//!
//! let field = Field::new("", [Operator::Required, Operator::MinLength(3)])?;
//! ```

pub use crate::collection::{FieldCollection, all_valid};
pub use crate::config::FieldConfig;
pub use crate::error::{FieldError, ValidationError};
pub use crate::field::Field;
pub use crate::operator::Operator;
pub use crate::pattern::DefaultPattern;
pub use crate::schema::{FieldSchema, RuleSpec};
