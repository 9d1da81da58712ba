//! Payment card number rule.

use super::Rule;
use crate::error::RuleError;
use crate::value::Value;
use regex::Regex;
use std::sync::OnceLock;

static CARD_NETWORK_REGEX: OnceLock<Regex> = OnceLock::new();

/// Prefix and length of the major card networks: Visa, Mastercard
/// (51-55 and 2221-2720), American Express, Diners Club, Discover and JCB.
fn card_network_regex() -> &'static Regex {
    CARD_NETWORK_REGEX.get_or_init(|| {
        Regex::new(concat!(
            "^(?:",
            "4[0-9]{12}(?:[0-9]{3}){0,2}",
            "|5[1-5][0-9]{14}",
            "|2(?:2(?:2[1-9]|[3-9][0-9])|[3-6][0-9]{2}|7(?:[01][0-9]|20))[0-9]{12}",
            "|3[47][0-9]{13}",
            "|3(?:0[0-5]|[68][0-9])[0-9]{11}",
            "|6(?:011|5[0-9]{2})[0-9]{12}",
            "|(?:2131|1800|35[0-9]{3})[0-9]{11}",
            ")$",
        ))
        .unwrap()
    })
}

/// Luhn mod-10 checksum over ASCII digits.
fn luhn(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Card number validation rule.
///
/// Spaces and hyphens between digit groups are ignored. The remaining digits
/// must carry a known network prefix and length and pass the Luhn checksum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditCardRule {
    /// Custom error message
    pub message: Option<String>,
}

impl CreditCardRule {
    /// Message recorded when no custom message is set.
    pub const DEFAULT_MESSAGE: &'static str = "must be a valid credit card number";

    /// Create the rule with its default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the rule with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    fn is_valid(number: &str) -> bool {
        let digits: String = number.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
        digits.bytes().all(|b| b.is_ascii_digit())
            && card_network_regex().is_match(&digits)
            && luhn(&digits)
    }
}

impl Rule for CreditCardRule {
    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        let Value::Str(s) = value else {
            return Ok(());
        };
        if Self::is_valid(s) {
            return Ok(());
        }
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| Self::DEFAULT_MESSAGE.to_string());
        Err(RuleError::new("credit_card", message))
    }

    fn rule_name(&self) -> &'static str {
        "credit_card"
    }
}
