//! Rules that read sibling fields of the record.

use crate::error::RuleError;
use crate::traits::ValidationRule;
use crate::value::{Record, Value};

/// Passes when the value equals the record's password field.
///
/// Both sides must be present; a missing password never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPasswordRule {
    password_field: String,
}

impl Default for ConfirmPasswordRule {
    fn default() -> Self {
        Self::new("password")
    }
}

impl ConfirmPasswordRule {
    /// Compare against `password_field` instead of `password`.
    pub fn new(password_field: impl Into<String>) -> Self {
        Self {
            password_field: password_field.into(),
        }
    }

    pub fn password_field(&self) -> &str {
        &self.password_field
    }
}

impl ValidationRule for ConfirmPasswordRule {
    fn validate(&self, value: Option<&Value>, record: &Record) -> Result<(), RuleError> {
        match (value, record.get(&self.password_field)) {
            (Some(confirmation), Some(password)) if confirmation == password => Ok(()),
            _ => Err(RuleError::new("confirm_password", "Passwords do not match")
                .param("field", &self.password_field)),
        }
    }

    fn rule_name(&self) -> &str {
        "confirm_password"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_password_field() {
        let record = Record::new()
            .with("password", "hunter22!")
            .with("password_confirm", "hunter22!");
        let rule = ConfirmPasswordRule::default();
        assert!(rule.validate(record.get("password_confirm"), &record).is_ok());
    }

    #[test]
    fn rejects_mismatch() {
        let record = Record::new()
            .with("password", "hunter22!")
            .with("password_confirm", "hunter23!");
        let err = ConfirmPasswordRule::default()
            .validate(record.get("password_confirm"), &record)
            .unwrap_err();
        assert_eq!(err.code, "confirm_password");
        assert_eq!(err.message, "Passwords do not match");
    }

    #[test]
    fn rejects_missing_password() {
        let record = Record::new().with("password_confirm", "hunter22!");
        let rule = ConfirmPasswordRule::default();
        assert!(rule.validate(record.get("password_confirm"), &record).is_err());
        assert!(rule.validate(None, &Record::new()).is_err());
    }

    #[test]
    fn compares_exact_values() {
        let record = Record::new().with("password", 12345).with("confirm", "12345");
        let rule = ConfirmPasswordRule::default();
        assert!(rule.validate(record.get("confirm"), &record).is_err());
    }

    #[test]
    fn custom_password_field() {
        let record = Record::new()
            .with("new_password", "s3cret-pass")
            .with("confirm", "s3cret-pass");
        let rule = ConfirmPasswordRule::new("new_password");
        assert_eq!(rule.password_field(), "new_password");
        assert!(rule.validate(record.get("confirm"), &record).is_ok());
    }
}
