//! Per-field validator chains.

use crate::descriptor::RuleSpec;
use crate::error::{RuleError, SchemaError};
use crate::registry::{RuleRegistry, SharedRule};
use crate::traits::ValidationRule;
use crate::value::{Record, Value};
use std::sync::Arc;

/// Accumulates rules for one field.
///
/// ```rust
/// use formcheck_validate::prelude::*;
///
/// let chain = ValidatorChain::builder()
///     .add(RequiredRule)
///     .add(LengthRule::min(3))
///     .build();
///
/// let record = Record::new();
/// let err = chain.evaluate(Some(&Value::from("ab")), &record).unwrap_err();
/// assert_eq!(err.message, "Value must be at least 3 characters long");
/// ```
#[derive(Debug, Default)]
pub struct ChainBuilder {
    rules: Vec<SharedRule>,
}

impl ChainBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn add(self, rule: impl ValidationRule + 'static) -> Self {
        self.add_shared(Arc::new(rule))
    }

    /// Append a rule that is shared with other chains.
    pub fn add_shared(mut self, rule: SharedRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append the rule a parsed descriptor resolves to.
    pub fn add_spec(self, spec: &RuleSpec, registry: &RuleRegistry) -> Result<Self, SchemaError> {
        Ok(self.add_shared(registry.bind(spec)?))
    }

    /// Append the rule named by a descriptor string, e.g. `"min=3"`.
    pub fn add_descriptor(
        self,
        descriptor: &str,
        registry: &RuleRegistry,
    ) -> Result<Self, SchemaError> {
        let spec = RuleSpec::parse(descriptor, registry)?;
        self.add_spec(&spec, registry)
    }

    /// Finish the chain.
    pub fn build(self) -> ValidatorChain {
        ValidatorChain { rules: self.rules }
    }
}

/// An immutable, ordered list of rules for one field.
#[derive(Debug, Default)]
pub struct ValidatorChain {
    rules: Vec<SharedRule>,
}

impl ValidatorChain {
    /// Start building a chain.
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Run the rules in order and stop at the first failure.
    ///
    /// Rules after a failing rule are never invoked.
    pub fn evaluate(&self, value: Option<&Value>, record: &Record) -> Result<(), RuleError> {
        for rule in &self.rules {
            let outcome = rule.validate(value, record);
            trace_trace!(rule = rule.rule_name(), passed = outcome.is_ok(), "evaluated rule");
            outcome?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the chained rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.rule_name()).collect()
    }
}
