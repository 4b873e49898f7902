//! Built-in validation rules.
//!
//! Every rule implements [`ValidationRule`](crate::ValidationRule) and is
//! constructed by the [`RuleRegistry`](crate::RuleRegistry) from a parsed
//! descriptor, or directly when assembling a chain by hand.

mod cross_field;
mod format;
mod length;
mod presence;

pub use cross_field::ConfirmPasswordRule;
pub use format::{EmailRule, ImageRule, UrlRule};
pub use length::{LengthRule, PasswordRule};
pub use presence::{NumberRule, RequiredRule, StringRule};
