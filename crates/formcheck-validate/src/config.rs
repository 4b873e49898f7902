//! Tunable parameters of the built-in rules.

use serde::Deserialize;

/// Configuration for the built-in rule set.
///
/// The defaults reproduce the stock behavior; a config is usually only
/// needed when a form names its password field differently or accepts other
/// image formats.
///
/// # Example
///
/// ```rust
/// use formcheck_validate::{RuleRegistry, ValidatorConfig};
///
/// let config = ValidatorConfig::default()
///     .password_field("new_password")
///     .image_media_type("image/webp");
///
/// let registry = RuleRegistry::with_config(config);
/// assert_eq!(registry.config().password_field, "new_password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Sibling field `confirm_password` compares against
    pub password_field: String,
    /// Media types accepted by `image` for uploaded files
    pub image_media_types: Vec<String>,
    /// File extensions accepted by `image` for path strings (lowercase, no dot)
    pub image_extensions: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            password_field: "password".to_string(),
            image_media_types: ["image/jpeg", "image/png", "image/jpg"]
                .into_iter()
                .map(String::from)
                .collect(),
            image_extensions: ["jpg", "jpeg", "png", "webp", "avif", "gif", "svg"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ValidatorConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field `confirm_password` reads.
    pub fn password_field(mut self, field: impl Into<String>) -> Self {
        self.password_field = field.into();
        self
    }

    /// Accept an additional media type for uploaded images.
    pub fn image_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.image_media_types.push(media_type.into());
        self
    }

    /// Accept an additional extension for image paths.
    pub fn image_extension(mut self, extension: impl Into<String>) -> Self {
        self.image_extensions
            .push(extension.into().trim_start_matches('.').to_lowercase());
        self
    }
}
