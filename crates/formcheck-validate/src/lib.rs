//! # formcheck validation
//!
//! Declarative, schema-driven validation of flat records. A schema maps
//! each field to an ordered list of compact rule descriptors; validating a
//! record yields either the record back or one error message per failing
//! field.
//!
//! ## Example
//!
//! ```rust
//! use formcheck_validate::prelude::*;
//!
//! let schema = Schema::new()
//!     .field("name", ["required", "min=2"])
//!     .field("email", ["required", "email"])
//!     .field("password", ["required", "password"])
//!     .field("password_confirm", ["confirm_password"]);
//!
//! let record = Record::new()
//!     .with("name", "Al")
//!     .with("email", "al@example.com")
//!     .with("password", "correct horse")
//!     .with("password_confirm", "correct horse");
//!
//! let result = validate_object(&schema, record).unwrap();
//! assert!(result.is_valid());
//! ```
//!
//! ## Rule descriptors
//!
//! `name["=" argument] [":" option]*`
//!
//! - `required` - value is present and non-empty
//! - `string` / `number` - value kind
//! - `email` / `url` - string format
//! - `image` - image upload or image file path
//! - `min=N` / `max=N` - length bounds
//! - `password` - longer than 8 characters
//! - `confirm_password` - equals the record's `password` field
//!
//! An unknown rule name is a [`SchemaError`], never a field error.
//!
//! ## Output
//!
//! ```json
//! { "valid": false, "errors": { "email": "Value must be a valid email address" } }
//! ```

#[macro_use]
mod tracing_macros;

mod chain;
mod config;
mod descriptor;
mod error;
mod object;
mod registry;
mod result;
mod traits;
mod value;

pub mod rules;

#[cfg(test)]
mod tests;

pub use chain::{ChainBuilder, ValidatorChain};
pub use config::ValidatorConfig;
pub use descriptor::{RuleDescriptor, RuleKind, RuleSpec};
pub use error::{RuleError, SchemaError, ValidationErrors};
pub use object::{validate_object, ObjectSchema, Schema};
pub use registry::{RuleRegistry, SharedRule};
pub use result::ValidationResult;
pub use traits::{BoxedRule, ValidationRule};
pub use value::{FileBlob, Record, Value};

/// Prelude module for validation
pub mod prelude {
    pub use crate::chain::{ChainBuilder, ValidatorChain};
    pub use crate::config::ValidatorConfig;
    pub use crate::error::{RuleError, SchemaError, ValidationErrors};
    pub use crate::object::{validate_object, ObjectSchema, Schema};
    pub use crate::registry::RuleRegistry;
    pub use crate::result::ValidationResult;
    pub use crate::rules::*;
    pub use crate::traits::{BoxedRule, ValidationRule};
    pub use crate::value::{FileBlob, Record, Value};
}
