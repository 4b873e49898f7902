//! Rule descriptor parsing.
//!
//! A descriptor is a compact string naming one rule:
//!
//! ```text
//! name["=" argument] [":" option]*
//! ```
//!
//! e.g. `"required"`, `"min=3"` or `"slug:strict"`. Parsing happens once,
//! when a schema is compiled; the result is a [`RuleSpec`] that the chain
//! builder binds to a concrete rule.

use crate::error::SchemaError;
use crate::registry::RuleRegistry;
use std::fmt;

/// The raw parts of a descriptor string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDescriptor {
    /// Rule name, left of `=`
    pub name: String,
    /// Inline argument, right of `=`
    pub argument: Option<String>,
    /// `:`-separated options following the base token
    pub options: Vec<String>,
}

impl RuleDescriptor {
    /// Split a descriptor into name, argument and options.
    pub fn parse(descriptor: &str) -> Result<Self, SchemaError> {
        let mut parts = descriptor.split(':');
        let base = parts.next().unwrap_or_default();
        let options = parts.map(str::to_string).collect();

        let (name, argument) = match base.split_once('=') {
            Some((name, argument)) => (name, Some(argument.to_string())),
            None => (base, None),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(SchemaError::EmptyRuleName {
                descriptor: descriptor.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            argument,
            options,
        })
    }
}

impl fmt::Display for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(argument) = &self.argument {
            write!(f, "={argument}")?;
        }
        for option in &self.options {
            write!(f, ":{option}")?;
        }
        Ok(())
    }
}

/// The built-in rule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    String,
    Number,
    Email,
    Url,
    Image,
    Password,
    ConfirmPassword,
}

impl RuleKind {
    /// Every argument-less built-in rule.
    pub const ALL: [RuleKind; 8] = [
        RuleKind::Required,
        RuleKind::String,
        RuleKind::Number,
        RuleKind::Email,
        RuleKind::Url,
        RuleKind::Image,
        RuleKind::Password,
        RuleKind::ConfirmPassword,
    ];

    /// Look up a built-in rule by its descriptor name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The descriptor name of the rule.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::String => "string",
            RuleKind::Number => "number",
            RuleKind::Email => "email",
            RuleKind::Url => "url",
            RuleKind::Image => "image",
            RuleKind::Password => "password",
            RuleKind::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed, typed rule ready to be bound into a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpec {
    /// `min=N`
    Min(usize),
    /// `max=N`
    Max(usize),
    /// Any other built-in rule
    Builtin(RuleKind),
    /// A rule registered on the [`RuleRegistry`] at runtime
    Custom {
        name: String,
        argument: Option<String>,
        options: Vec<String>,
    },
}

/// Names of the built-in rules that take a length bound.
pub const BOUND_RULES: [&str; 2] = ["min", "max"];

impl RuleSpec {
    /// Parse a descriptor string against the rules known to `registry`.
    pub fn parse(descriptor: &str, registry: &RuleRegistry) -> Result<Self, SchemaError> {
        Self::from_descriptor(RuleDescriptor::parse(descriptor)?, registry)
    }

    /// Resolve a split descriptor to a typed rule.
    ///
    /// `min` and `max` are checked first since their argument has to be a
    /// numeric bound. Built-ins reject inline arguments and ignore options;
    /// custom rules receive both.
    pub fn from_descriptor(
        descriptor: RuleDescriptor,
        registry: &RuleRegistry,
    ) -> Result<Self, SchemaError> {
        let RuleDescriptor {
            name,
            argument,
            options,
        } = descriptor;

        match name.as_str() {
            "min" => return Ok(RuleSpec::Min(parse_bound(&name, argument)?)),
            "max" => return Ok(RuleSpec::Max(parse_bound(&name, argument)?)),
            _ => {}
        }

        if let Some(kind) = RuleKind::from_name(&name) {
            if let Some(argument) = argument {
                return Err(SchemaError::UnexpectedArgument {
                    rule: name,
                    argument,
                });
            }
            return Ok(RuleSpec::Builtin(kind));
        }

        if registry.contains_custom(&name) {
            return Ok(RuleSpec::Custom {
                name,
                argument,
                options,
            });
        }

        Err(SchemaError::UnknownRule { rule: name })
    }

    /// The descriptor name of the rule.
    pub fn name(&self) -> &str {
        match self {
            RuleSpec::Min(_) => "min",
            RuleSpec::Max(_) => "max",
            RuleSpec::Builtin(kind) => kind.name(),
            RuleSpec::Custom { name, .. } => name,
        }
    }
}

fn parse_bound(rule: &str, argument: Option<String>) -> Result<usize, SchemaError> {
    let argument = argument.ok_or_else(|| SchemaError::MissingArgument {
        rule: rule.to_string(),
    })?;

    argument
        .trim()
        .parse()
        .map_err(|_| SchemaError::InvalidArgument {
            rule: rule.to_string(),
            argument,
        })
}
