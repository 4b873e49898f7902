//! Error types: rule failures, per-field error maps and schema errors.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Failure reported by a single validation rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleError {
    /// The rule code (e.g. "required", "min", "email")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional parameters describing the failure
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, serde_json::Value>,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter to the error.
    pub fn param(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.params.insert(key.into(), v);
        }
        self
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for RuleError {}

/// Validation failures of a record, one per failing field.
///
/// Fields keep the order in which they were rejected, which is schema
/// order. Serializes as a plain `{"field": "message"}` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    fields: IndexMap<String, RuleError>,
}

impl ValidationErrors {
    /// Create an empty error collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the failure for a field.
    ///
    /// A field holds a single failure; a later call for the same field
    /// replaces the earlier one.
    pub fn add(&mut self, field: impl Into<String>, error: RuleError) {
        self.fields.insert(field.into(), error);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Get the failure for a field.
    pub fn get(&self, field: &str) -> Option<&RuleError> {
        self.fields.get(field)
    }

    /// Get the message for a field.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|e| e.message.as_str())
    }

    /// Names of all failing fields.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Iterate over `(field, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleError)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert to `Ok(())` when empty, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, error) in &self.fields {
            map.serialize_entry(field, &error.message)?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {} field error(s)", self.len())
    }
}

impl std::error::Error for ValidationErrors {}

/// A schema that cannot be compiled.
///
/// These are authoring mistakes in the schema, never a property of the
/// record being validated, and they abort the whole validation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("empty rule name in descriptor '{descriptor}'")]
    EmptyRuleName { descriptor: String },

    #[error("invalid rule name '{rule}'")]
    InvalidRuleName { rule: String },

    #[error("unknown validation rule '{rule}'")]
    UnknownRule { rule: String },

    #[error("rule '{rule}' requires an argument (e.g. '{rule}=5')")]
    MissingArgument { rule: String },

    #[error("rule '{rule}' expects a non-negative integer argument, got '{argument}'")]
    InvalidArgument { rule: String, argument: String },

    #[error("rule '{rule}' does not take an argument, got '{argument}'")]
    UnexpectedArgument { rule: String, argument: String },

    #[error("rule name '{rule}' is reserved by a built-in rule")]
    ReservedRuleName { rule: String },

    #[error("field '{field}': {source}")]
    Field {
        field: String,
        #[source]
        source: Box<SchemaError>,
    },
}

impl SchemaError {
    /// Attach the schema field the error was raised for.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        SchemaError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error, without field context.
    pub fn root(&self) -> &SchemaError {
        match self {
            SchemaError::Field { source, .. } => source.root(),
            other => other,
        }
    }

    /// The field the error was raised for, if known.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}
