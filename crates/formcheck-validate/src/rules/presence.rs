//! Presence and type rules: `required`, `string`, `number`.

use crate::error::RuleError;
use crate::traits::ValidationRule;
use crate::value::{Record, Value};

/// Required (non-empty) validation rule.
///
/// | value | passes |
/// |---|---|
/// | absent, `null`, `false` | no |
/// | `0`, `-0`, `NaN` | no |
/// | other numbers, `true` | yes |
/// | object | yes |
/// | empty string / array | no |
/// | non-empty string / array | yes |
/// | file | when its size is positive |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredRule;

impl RequiredRule {
    pub fn new() -> Self {
        Self
    }

    fn is_present(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(_) => true,
            Value::File(file) => file.size > 0,
        }
    }
}

impl ValidationRule for RequiredRule {
    fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
        if value.is_some_and(Self::is_present) {
            Ok(())
        } else {
            Err(RuleError::new("required", "Value is required"))
        }
    }

    fn rule_name(&self) -> &str {
        "required"
    }
}

/// Passes when the value is a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringRule;

impl StringRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for StringRule {
    fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
        match value {
            Some(Value::String(_)) => Ok(()),
            _ => Err(RuleError::new("string", "Value must be a string")),
        }
    }

    fn rule_name(&self) -> &str {
        "string"
    }
}

/// Passes when the value is a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberRule;

impl NumberRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for NumberRule {
    fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
        match value {
            Some(Value::Integer(_) | Value::Number(_)) => Ok(()),
            _ => Err(RuleError::new("number", "Value must be a number")),
        }
    }

    fn rule_name(&self) -> &str {
        "number"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FileBlob;

    fn check<R: ValidationRule>(rule: &R, value: Option<Value>) -> bool {
        rule.validate(value.as_ref(), &Record::new()).is_ok()
    }

    #[test]
    fn required_truth_table() {
        let rule = RequiredRule::new();

        assert!(!check(&rule, None));
        assert!(!check(&rule, Some(Value::Null)));
        assert!(!check(&rule, Some(Value::Bool(false))));
        assert!(check(&rule, Some(Value::Bool(true))));
        assert!(!check(&rule, Some(Value::Number(0.0))));
        assert!(!check(&rule, Some(Value::Number(-0.0))));
        assert!(!check(&rule, Some(Value::Number(f64::NAN))));
        assert!(check(&rule, Some(Value::Number(-3.5))));
        assert!(!check(&rule, Some(Value::Integer(0))));
        assert!(check(&rule, Some(Value::Integer(7))));
        assert!(check(&rule, Some(Value::Object(Default::default()))));
        assert!(!check(&rule, Some(Value::from(""))));
        assert!(check(&rule, Some(Value::from("  "))));
        assert!(check(&rule, Some(Value::from("x"))));
        assert!(!check(&rule, Some(Value::Array(vec![]))));
        assert!(check(&rule, Some(Value::from(vec![1]))));
        assert!(!check(&rule, Some(Value::from(FileBlob::new("a.png", "image/png", 0)))));
        assert!(check(&rule, Some(Value::from(FileBlob::new("a.png", "image/png", 1)))));
    }

    #[test]
    fn required_message() {
        let err = RequiredRule.validate(None, &Record::new()).unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.message, "Value is required");
    }

    #[test]
    fn string_rule() {
        assert!(check(&StringRule, Some(Value::from(""))));
        assert!(!check(&StringRule, Some(Value::Number(1.0))));
        assert!(!check(&StringRule, None));

        let err = StringRule.validate(Some(&Value::Null), &Record::new()).unwrap_err();
        assert_eq!(err.message, "Value must be a string");
    }

    #[test]
    fn number_rule() {
        assert!(check(&NumberRule, Some(Value::Number(0.0))));
        assert!(check(&NumberRule, Some(Value::Number(f64::NAN))));
        assert!(check(&NumberRule, Some(Value::Integer(42))));
        assert!(!check(&NumberRule, Some(Value::from("42"))));
        assert!(!check(&NumberRule, None));

        let err = NumberRule.validate(None, &Record::new()).unwrap_err();
        assert_eq!(err.message, "Value must be a number");
    }
}
