//! # fieldcheck
//!
//! Fluent, chainable field validation. A [`Validator`] session walks one
//! field at a time, runs named checks against the field's value and collects
//! human-readable errors for the whole session.
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let mut v = Validator::new("email", "not-an-email");
//! v.email()
//!     .next_field("age", 17u8)
//!     .min(18)
//!     .next_field("website", "")
//!     .not_required()
//!     .url();
//!
//! let messages: Vec<_> = v.errors().iter().map(|e| e.message.as_str()).collect();
//! assert_eq!(
//!     messages,
//!     ["must be a valid email", "must be greater than or equal to 18"]
//! );
//! ```
//!
//! ## Validation Rules
//!
//! - `has_special_char` - At least one character outside letters, digits and whitespace
//! - `email` - Email format
//! - `min(n)` / `max(n)` - Inclusive bounds on string length or numeric value
//! - `url` - `http`, `https` or `ftp` URL
//! - `alpha`, `numeric`, `alpha_numeric` - ASCII character classes
//! - `date` - `YYYY-MM-DD` shape
//! - `matches(&regex)` - Caller-supplied pattern
//! - `phone_number` - Optional `+` and 7 to 15 digits
//! - `credit_card` - Card number with Luhn checksum
//! - `ip_address` - Dotted-quad IPv4
//!
//! Every field is required by default: an empty value (empty string, zero,
//! or `Null`) records `"field is required"` unless
//! [`not_required`](Validator::not_required) was called first. After the
//! first error on a field, the remaining rules for that field are skipped.
//!
//! ## Error Format
//!
//! [`Validator::into_result`] returns a [`ValidationError`] that serializes
//! to:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "validation_error",
//!     "message": "Validation failed",
//!     "fields": [
//!       {"field": "email", "message": "must be a valid email"}
//!     ]
//!   }
//! }
//! ```

mod config;
mod error;
pub mod rules;
mod serializable;
mod validator;
mod value;

pub use config::{ConfigError, LengthUnit, ValidatorConfig, ENV_PREFIX};
pub use error::{FieldError, RuleError, ValidationError};
pub use rules::Rule;
pub use serializable::SerializableRule;
pub use validator::{Validator, REQUIRED_MESSAGE};
pub use value::{Value, ValueError};

/// Prelude module for validation
pub mod prelude {
    pub use crate::config::{LengthUnit, ValidatorConfig};
    pub use crate::error::{FieldError, ValidationError};
    pub use crate::rules::Rule;
    pub use crate::serializable::SerializableRule;
    pub use crate::validator::Validator;
    pub use crate::value::Value;
}
