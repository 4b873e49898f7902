//! Format rules: `email`, `url`, `image`.

use crate::config::ValidatorConfig;
use crate::error::RuleError;
use crate::traits::ValidationRule;
use crate::value::{Record, Value};
use regex::Regex;
use std::sync::OnceLock;

// Pre-compiled regex patterns
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // RFC 5322 simplified email regex
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern is valid")
    })
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        // RFC 3986 derived: optional scheme, "//", optional userinfo, an IPv4
        // literal or domain name, then optional port, path, query, fragment.
        let ucs = r"\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";
        let unreserved = format!(r"[a-z0-9\-._~{ucs}]");
        let pct_encoded = r"%[0-9a-f]{2}";
        let sub_delims = r"[!$&'()*+,;=]";
        let pchar = format!("(?:{unreserved}|{pct_encoded}|{sub_delims}|:|@)");

        let userinfo = format!("(?:(?:{unreserved}|{pct_encoded}|{sub_delims}|:)*@)?");
        let octet = r"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])";
        let ipv4 = format!(r"(?:{octet}\.){{3}}{octet}");

        let alnum = format!("[a-z0-9{ucs}]");
        let alpha = format!("[a-z{ucs}]");
        let label_char = format!(r"[a-z0-9\-._~{ucs}]");
        let label = format!("(?:{alnum}|{alnum}{label_char}*{alnum})");
        let tld = format!("(?:{alpha}|{alpha}{label_char}*{alpha})");
        let domain = format!(r"(?:{label}\.)+{tld}\.?");

        let path = format!("(?:/(?:{pchar}+(?:/{pchar}*)*)?)?");
        let query = format!(r"(?:\?(?:{pchar}|[\x{{E000}}-\x{{F8FF}}]|/|\?)*)?");
        let fragment = format!(r"(?:#(?:{pchar}|/|\?)*)?");

        let pattern = format!(
            r"(?i)^(?:(?:https?|ftp):)?//{userinfo}(?:{ipv4}|{domain})(?::[0-9]*)?{path}{query}{fragment}$"
        );
        Regex::new(&pattern).expect("url pattern is valid")
    })
}

/// Email format validation rule.
///
/// Validates that a string is an email address according to a simplified
/// RFC 5322 grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailRule;

impl EmailRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for EmailRule {
    fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
        match value.and_then(Value::as_str) {
            Some(s) if email_regex().is_match(s) => Ok(()),
            _ => Err(RuleError::new("email", "Value must be a valid email address")),
        }
    }

    fn rule_name(&self) -> &str {
        "email"
    }
}

/// URL format validation rule.
///
/// Accepts absolute (`https://host/...`) and scheme-relative (`//host/...`)
/// URLs. Hosts are IPv4 literals or dotted domain names with an alphabetic
/// top-level label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlRule;

impl UrlRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for UrlRule {
    fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
        match value.and_then(Value::as_str) {
            Some(s) if url_regex().is_match(s) => Ok(()),
            _ => Err(RuleError::new("url", "Value must be a valid url")),
        }
    }

    fn rule_name(&self) -> &str {
        "url"
    }
}

/// Image validation rule.
///
/// Uploaded files are checked by declared media type, strings by the
/// extension after the last dot (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRule {
    media_types: Vec<String>,
    extensions: Vec<String>,
}

impl Default for ImageRule {
    fn default() -> Self {
        Self::from_config(&ValidatorConfig::default())
    }
}

impl ImageRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the rule from the configured media types and extensions.
    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self {
            media_types: config.image_media_types.clone(),
            extensions: config
                .image_extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
        }
    }

    fn accepts_path(&self, path: &str) -> bool {
        path.rsplit_once('.').is_some_and(|(_, ext)| {
            let ext = ext.to_lowercase();
            self.extensions.iter().any(|e| *e == ext)
        })
    }
}

impl ValidationRule for ImageRule {
    fn validate(&self, value: Option<&Value>, _record: &Record) -> Result<(), RuleError> {
        let valid = match value {
            Some(Value::File(file)) => self.media_types.iter().any(|t| *t == file.media_type),
            Some(Value::String(path)) => self.accepts_path(path),
            _ => false,
        };

        if valid {
            Ok(())
        } else {
            Err(RuleError::new("image", "Image type is invalid"))
        }
    }

    fn rule_name(&self) -> &str {
        "image"
    }
}
