//! The rule trait every chain entry implements.

use crate::error::RuleError;
use crate::value::{Record, Value};
use std::fmt::Debug;

/// A single validation rule bound to its construction arguments.
///
/// `value` is the field's own value (`None` when the field is absent from
/// the record) and `record` is the whole record, so rules may look at
/// sibling fields.
///
/// ## Example
///
/// ```rust
/// use formcheck_validate::prelude::*;
///
/// #[derive(Debug)]
/// struct Lowercase;
///
/// impl ValidationRule for Lowercase {
///     fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
///         match value.and_then(Value::as_str) {
///             Some(s) if s.chars().all(|c| !c.is_uppercase()) => Ok(()),
///             _ => Err(RuleError::new(self.rule_name(), "Value must be lowercase")),
///         }
///     }
///
///     fn rule_name(&self) -> &str {
///         "lowercase"
///     }
/// }
/// ```
pub trait ValidationRule: Debug + Send + Sync {
    /// Check the value against this rule.
    fn validate(&self, value: Option<&Value>, record: &Record) -> Result<(), RuleError>;

    /// The rule code used in error reports.
    fn rule_name(&self) -> &str;
}

/// A type-erased rule, as stored in a validator chain.
pub type BoxedRule = Box<dyn ValidationRule>;
