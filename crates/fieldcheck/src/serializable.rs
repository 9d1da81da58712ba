//! Rules described as data.

use crate::config::LengthUnit;
use crate::rules::{
    AlphaNumericRule, AlphaRule, CreditCardRule, DateRule, EmailRule, HasSpecialCharRule,
    IpAddressRule, MatchRule, MaxRule, MinRule, NumericRule, PhoneNumberRule, Rule, UrlRule,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Wrapper for serializable validation rules.
///
/// This enum lets a field's checks be kept in configuration and replayed
/// with [`Validator::apply`](crate::Validator::apply):
///
/// ```json
/// [{"type": "min", "value": 3}, {"type": "email", "message": "bad email"}]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SerializableRule {
    /// At least one special character
    HasSpecialChar {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Email format validation
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Inclusive lower bound on length or value
    Min {
        value: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Inclusive upper bound on length or value
    Max {
        value: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// URL format validation
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Letters only
    Alpha {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Digits only
    Numeric {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Letters and digits only
    AlphaNumeric {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// `YYYY-MM-DD`
    Date {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Regex pattern validation
    Match {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Phone number syntax
    PhoneNumber {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Card number with Luhn checksum
    CreditCard {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Dotted-quad IPv4 address
    IpAddress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl SerializableRule {
    /// The custom message, if one was given.
    pub fn message(&self) -> Option<&str> {
        match self {
            SerializableRule::HasSpecialChar { message }
            | SerializableRule::Email { message }
            | SerializableRule::Min { message, .. }
            | SerializableRule::Max { message, .. }
            | SerializableRule::Url { message }
            | SerializableRule::Alpha { message }
            | SerializableRule::Numeric { message }
            | SerializableRule::AlphaNumeric { message }
            | SerializableRule::Date { message }
            | SerializableRule::Match { message, .. }
            | SerializableRule::PhoneNumber { message }
            | SerializableRule::CreditCard { message }
            | SerializableRule::IpAddress { message } => message.as_deref(),
        }
    }

    /// Build the executable rule.
    ///
    /// Returns the pattern's compile error for a `match` rule whose pattern
    /// is not a valid regex.
    pub fn to_rule(&self, unit: LengthUnit) -> Result<Box<dyn Rule>, regex::Error> {
        fn custom<R: Default>(message: &Option<String>, with: impl FnOnce(String) -> R) -> R {
            message.clone().map(with).unwrap_or_default()
        }

        let rule: Box<dyn Rule> = match self {
            SerializableRule::HasSpecialChar { message } => {
                Box::new(custom(message, HasSpecialCharRule::with_message))
            }
            SerializableRule::Email { message } => Box::new(custom(message, EmailRule::with_message)),
            SerializableRule::Min { value, message } => {
                let mut rule = MinRule::new(*value).unit(unit);
                rule.message = message.clone();
                Box::new(rule)
            }
            SerializableRule::Max { value, message } => {
                let mut rule = MaxRule::new(*value).unit(unit);
                rule.message = message.clone();
                Box::new(rule)
            }
            SerializableRule::Url { message } => Box::new(custom(message, UrlRule::with_message)),
            SerializableRule::Alpha { message } => Box::new(custom(message, AlphaRule::with_message)),
            SerializableRule::Numeric { message } => {
                Box::new(custom(message, NumericRule::with_message))
            }
            SerializableRule::AlphaNumeric { message } => {
                Box::new(custom(message, AlphaNumericRule::with_message))
            }
            SerializableRule::Date { message } => Box::new(custom(message, DateRule::with_message)),
            SerializableRule::Match { pattern, message } => {
                let mut rule = MatchRule::new(Regex::new(pattern)?);
                rule.message = message.clone();
                Box::new(rule)
            }
            SerializableRule::PhoneNumber { message } => {
                Box::new(custom(message, PhoneNumberRule::with_message))
            }
            SerializableRule::CreditCard { message } => {
                Box::new(custom(message, CreditCardRule::with_message))
            }
            SerializableRule::IpAddress { message } => {
                Box::new(custom(message, IpAddressRule::with_message))
            }
        };
        Ok(rule)
    }
}
