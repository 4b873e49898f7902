//! The outcome of validating a record.

use crate::error::ValidationErrors;
use crate::value::Record;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Outcome of validating a record against a schema.
///
/// Serializes to `{"valid": true, "data": {...}}` or
/// `{"valid": false, "errors": {"field": "message"}}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Every field passed; the record is handed back unchanged.
    Valid { data: Record },
    /// At least one field failed.
    Invalid { errors: ValidationErrors },
}

impl ValidationResult {
    pub(crate) fn from_parts(data: Record, errors: ValidationErrors) -> Self {
        if errors.is_empty() {
            ValidationResult::Valid { data }
        } else {
            ValidationResult::Invalid { errors }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// The validated record, if valid.
    pub fn data(&self) -> Option<&Record> {
        match self {
            ValidationResult::Valid { data } => Some(data),
            ValidationResult::Invalid { .. } => None,
        }
    }

    /// The field errors, if invalid.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid { errors } => Some(errors),
        }
    }

    /// Message reported for `field`, if it failed.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors().and_then(|e| e.message(field))
    }

    /// Convert into a `Result`, keeping the record on success.
    pub fn into_result(self) -> Result<Record, ValidationErrors> {
        match self {
            ValidationResult::Valid { data } => Ok(data),
            ValidationResult::Invalid { errors } => Err(errors),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        match self {
            ValidationResult::Valid { data } => {
                state.serialize_field("valid", &true)?;
                state.serialize_field("data", data)?;
            }
            ValidationResult::Invalid { errors } => {
                state.serialize_field("valid", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}
