//! Object-level validation: schemas, compilation and record checks.

use crate::chain::ValidatorChain;
use crate::descriptor::RuleSpec;
use crate::error::{SchemaError, ValidationErrors};
use crate::registry::{RuleRegistry, SharedRule};
use crate::result::ValidationResult;
use crate::value::Record;
use indexmap::IndexMap;

/// Field name → ordered rule descriptors.
///
/// ```rust
/// use formcheck_validate::Schema;
///
/// let schema = Schema::new()
///     .field("email", ["required", "email"])
///     .field("password", ["required", "password"])
///     .field("password_confirm", ["confirm_password"]);
///
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: IndexMap<String, Vec<String>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with its rule descriptors.
    ///
    /// Adding a field again replaces its descriptors but keeps its position.
    pub fn field<I, S>(mut self, name: impl Into<String>, descriptors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, descriptors);
        self
    }

    /// Add a field with its rule descriptors.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, descriptors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.insert(
            name.into(),
            descriptors.into_iter().map(Into::into).collect(),
        );
    }

    /// Descriptors of a field.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K, I, S> FromIterator<(K, I)> for Schema
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut schema = Schema::new();
        for (name, descriptors) in iter {
            schema.insert(name, descriptors);
        }
        schema
    }
}

/// A schema whose descriptors have been parsed and bound to rules.
///
/// Compile once and validate as many records as needed; every call builds
/// fresh chains from the bound rules and shares nothing mutable, so a
/// compiled schema can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    fields: IndexMap<String, Vec<SharedRule>>,
}

impl ObjectSchema {
    /// Compile a schema against the built-in rules.
    pub fn compile(schema: &Schema) -> Result<Self, SchemaError> {
        Self::compile_with(schema, &RuleRegistry::new())
    }

    /// Compile a schema against `registry`.
    ///
    /// Fails on the first descriptor that does not resolve to a rule.
    pub fn compile_with(schema: &Schema, registry: &RuleRegistry) -> Result<Self, SchemaError> {
        let mut fields = IndexMap::with_capacity(schema.len());

        for (field, descriptors) in schema.iter() {
            let rules = descriptors
                .iter()
                .map(|descriptor| {
                    RuleSpec::parse(descriptor, registry).and_then(|spec| registry.bind(&spec))
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| {
                    trace_warn!(field, error = %err, "invalid validation schema");
                    err.in_field(field)
                })?;
            fields.insert(field.to_string(), rules);
        }

        trace_debug!(fields = fields.len(), "compiled validation schema");
        Ok(Self { fields })
    }

    /// Schema field names in validation order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build the chain for `field`, if the schema has it.
    pub fn chain(&self, field: &str) -> Option<ValidatorChain> {
        self.fields.get(field).map(|rules| Self::build_chain(rules))
    }

    fn build_chain(rules: &[SharedRule]) -> ValidatorChain {
        rules
            .iter()
            .fold(ValidatorChain::builder(), |builder, rule| {
                builder.add_shared(rule.clone())
            })
            .build()
    }

    /// Validate a record.
    ///
    /// Every schema field is checked, in schema order, even after an
    /// earlier field failed. Fields the schema does not mention are
    /// ignored and returned untouched with the data.
    pub fn validate(&self, record: Record) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        for (field, rules) in &self.fields {
            let chain = Self::build_chain(rules);
            if let Err(error) = chain.evaluate(record.get(field), &record) {
                trace_debug!(
                    field = %field,
                    code = %error.code,
                    kind = record.get(field).map_or("absent", crate::value::Value::kind),
                    "field rejected"
                );
                errors.add(field.clone(), error);
            }
        }

        trace_debug!(
            fields = self.fields.len(),
            failed = errors.len(),
            "validated record"
        );
        ValidationResult::from_parts(record, errors)
    }
}

/// Validate `record` against `schema`.
///
/// The schema is compiled first; an unusable descriptor anywhere in it
/// fails the whole call with a [`SchemaError`] before any field is checked.
///
/// ```rust
/// use formcheck_validate::{validate_object, Record, Schema};
///
/// let schema = Schema::new().field("email", ["required", "email"]);
///
/// let result = validate_object(&schema, Record::new().with("email", "")).unwrap();
/// assert_eq!(result.message("email"), Some("Value is required"));
///
/// let result = validate_object(&schema, Record::new().with("email", "al@example.com")).unwrap();
/// assert!(result.is_valid());
/// ```
pub fn validate_object(schema: &Schema, record: Record) -> Result<ValidationResult, SchemaError> {
    Ok(ObjectSchema::compile(schema)?.validate(record))
}
