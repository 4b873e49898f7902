//! Length rules: `min`, `max`, `password`.

use crate::error::RuleError;
use crate::traits::ValidationRule;
use crate::value::{Record, Value};

/// Length the `password` rule must exceed.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Length validation rule backing `min=N` and `max=N`.
///
/// Strings are measured in chars and arrays in elements. Any other value
/// (including an absent field) cannot be measured and fails with
/// "Value must be measurable".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    /// Minimum length (inclusive)
    pub min: Option<usize>,
    /// Maximum length (inclusive)
    pub max: Option<usize>,
}

impl LengthRule {
    /// Create a length rule with min and max bounds.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Create a length rule with only a minimum.
    pub fn min(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Create a length rule with only a maximum.
    pub fn max(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }
}

impl ValidationRule for LengthRule {
    fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
        let Some(len) = value.and_then(Value::measure) else {
            return Err(RuleError::new(self.rule_name(), "Value must be measurable"));
        };

        if let Some(min) = self.min {
            if len < min {
                return Err(RuleError::new(
                    "min",
                    format!("Value must be at least {min} characters long"),
                )
                .param("min", min)
                .param("actual", len));
            }
        }

        if let Some(max) = self.max {
            if len > max {
                return Err(RuleError::new(
                    "max",
                    format!("Value must be at most {max} characters long"),
                )
                .param("max", max)
                .param("actual", len));
            }
        }

        Ok(())
    }

    fn rule_name(&self) -> &str {
        match (self.min, self.max) {
            (Some(_), None) => "min",
            (None, Some(_)) => "max",
            _ => "length",
        }
    }
}

/// Password strength rule.
///
/// Passes when the value is longer than [`PASSWORD_MIN_LENGTH`]; a value of
/// exactly that length is rejected even though the message reads
/// "at least".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordRule;

impl PasswordRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for PasswordRule {
    fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
        match value.and_then(Value::measure) {
            Some(len) if len > PASSWORD_MIN_LENGTH => Ok(()),
            _ => Err(RuleError::new(
                "password",
                format!("Password must be at least {PASSWORD_MIN_LENGTH} characters long"),
            )
            .param("min", PASSWORD_MIN_LENGTH)),
        }
    }

    fn rule_name(&self) -> &str {
        "password"
    }
}
