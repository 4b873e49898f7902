//! The catalog of rules a schema may name.

use crate::config::ValidatorConfig;
use crate::descriptor::{RuleKind, RuleSpec, BOUND_RULES};
use crate::error::SchemaError;
use crate::rules::{
    ConfirmPasswordRule, EmailRule, ImageRule, LengthRule, NumberRule, PasswordRule, RequiredRule,
    StringRule, UrlRule,
};
use crate::traits::{BoxedRule, ValidationRule};
use std::collections::HashMap;
use std::sync::Arc;

/// A rule shared between the compiled schema and the chains built from it.
pub type SharedRule = Arc<dyn ValidationRule>;

/// Constructor for a custom rule: receives the descriptor's inline argument
/// and its options.
type RuleConstructor = dyn Fn(Option<&str>, &[String]) -> Result<BoxedRule, SchemaError> + Send + Sync;

/// Maps rule specs to rule instances.
///
/// The built-in rules are always available. Additional rules can be
/// registered under new names; built-in names cannot be overridden.
///
/// ## Example
///
/// ```rust
/// use formcheck_validate::prelude::*;
///
/// #[derive(Debug)]
/// struct OneOf(Vec<String>);
///
/// impl ValidationRule for OneOf {
///     fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
///         match value.and_then(Value::as_str) {
///             Some(s) if self.0.iter().any(|o| o == s) => Ok(()),
///             _ => Err(RuleError::new("one_of", "Value is not an allowed option")),
///         }
///     }
///
///     fn rule_name(&self) -> &str {
///         "one_of"
///     }
/// }
///
/// let mut registry = RuleRegistry::new();
/// registry
///     .register("one_of", |_, options| Ok(Box::new(OneOf(options.to_vec()))))
///     .unwrap();
///
/// let schema = Schema::new().field("plan", ["required", "one_of:free:pro"]);
/// let compiled = ObjectSchema::compile_with(&schema, &registry).unwrap();
/// assert!(compiled.validate(Record::new().with("plan", "pro")).is_valid());
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    config: ValidatorConfig,
    custom: HashMap<String, Arc<RuleConstructor>>,
}

impl RuleRegistry {
    /// Create a registry with the built-in rules and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry whose built-in rules use `config`.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            custom: HashMap::new(),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Register a custom rule under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> Result<(), SchemaError>
    where
        F: Fn(Option<&str>, &[String]) -> Result<BoxedRule, SchemaError> + Send + Sync + 'static,
    {
        let name = name.into();
        if Self::is_builtin(&name) {
            return Err(SchemaError::ReservedRuleName { rule: name });
        }
        if name.is_empty() || name.contains([':', '=']) {
            return Err(SchemaError::InvalidRuleName { rule: name });
        }

        trace_debug!(rule = %name, "registered custom validation rule");
        self.custom.insert(name, Arc::new(constructor));
        Ok(())
    }

    /// Check whether `name` is a built-in rule.
    pub fn is_builtin(name: &str) -> bool {
        BOUND_RULES.contains(&name) || RuleKind::from_name(name).is_some()
    }

    /// Check whether a custom rule is registered under `name`.
    pub fn contains_custom(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    /// Check whether `name` resolves to any rule.
    pub fn contains(&self, name: &str) -> bool {
        Self::is_builtin(name) || self.contains_custom(name)
    }

    /// Instantiate the rule described by `spec`.
    pub fn bind(&self, spec: &RuleSpec) -> Result<SharedRule, SchemaError> {
        let rule: SharedRule = match spec {
            RuleSpec::Min(min) => Arc::new(LengthRule::min(*min)),
            RuleSpec::Max(max) => Arc::new(LengthRule::max(*max)),
            RuleSpec::Builtin(kind) => self.bind_builtin(*kind),
            RuleSpec::Custom {
                name,
                argument,
                options,
            } => {
                let constructor = self
                    .custom
                    .get(name)
                    .ok_or_else(|| SchemaError::UnknownRule { rule: name.clone() })?;
                Arc::from(constructor(argument.as_deref(), options.as_slice())?)
            }
        };
        Ok(rule)
    }

    fn bind_builtin(&self, kind: RuleKind) -> SharedRule {
        match kind {
            RuleKind::Required => Arc::new(RequiredRule),
            RuleKind::String => Arc::new(StringRule),
            RuleKind::Number => Arc::new(NumberRule),
            RuleKind::Email => Arc::new(EmailRule),
            RuleKind::Url => Arc::new(UrlRule),
            RuleKind::Image => Arc::new(ImageRule::from_config(&self.config)),
            RuleKind::Password => Arc::new(PasswordRule),
            RuleKind::ConfirmPassword => {
                Arc::new(ConfirmPasswordRule::new(self.config.password_field.clone()))
            }
        }
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("config", &self.config)
            .field("custom_rules", &self.custom.keys().collect::<Vec<_>>())
            .finish()
    }
}
