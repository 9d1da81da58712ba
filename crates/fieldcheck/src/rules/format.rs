//! String format rules.
//!
//! Built-in patterns are compiled once per process and shared read-only.

use super::Rule;
use crate::error::RuleError;
use crate::value::Value;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

// Pre-compiled regex patterns
static SPECIAL_CHAR_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static ALPHA_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();
static ALPHA_NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();
static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn special_char_regex() -> &'static Regex {
    SPECIAL_CHAR_REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\t\n\f\r ]").unwrap())
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").unwrap())
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"^(https?|ftp)://",
            r"(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]*[a-zA-Z0-9])\.)*",
            r"([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]*[a-zA-Z0-9])",
            r"(:[0-9]+)?",
            r"(/[-a-zA-Z0-9_%.~#?&=]*)*$",
        ))
        .unwrap()
    })
}

fn alpha_regex() -> &'static Regex {
    ALPHA_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z]+$").unwrap())
}

fn numeric_regex() -> &'static Regex {
    NUMERIC_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").unwrap())
}

fn alpha_numeric_regex() -> &'static Regex {
    ALPHA_NUMERIC_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap())
}

fn date_regex() -> &'static Regex {
    // ASCII digits only; `\d` would also accept other Unicode digits
    DATE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap())
}

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap())
}

/// Declares a message-only rule that accepts a string when `$check` holds.
macro_rules! string_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $code:literal, $message:literal, |$s:ident| $check:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            /// Custom error message
            pub message: Option<String>,
        }

        impl $name {
            /// Message recorded when no custom message is set.
            pub const DEFAULT_MESSAGE: &'static str = $message;

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
        }

        impl Rule for $name {
            fn validate(&self, value: &Value) -> Result<(), RuleError> {
                let Value::Str($s) = value else {
                    return Ok(());
                };
                if $check {
                    Ok(())
                } else {
                    let message = self
                        .message
                        .clone()
                        .unwrap_or_else(|| Self::DEFAULT_MESSAGE.to_string());
                    Err(RuleError::new($code, message))
                }
            }

            fn rule_name(&self) -> &'static str {
                $code
            }
        }
    };
}

string_rule!(
    /// Requires at least one character outside letters, digits and whitespace.
    HasSpecialCharRule,
    "has_special_char",
    "must contain at least one special character",
    |s| special_char_regex().is_match(s)
);

string_rule!(
    /// Email format validation rule.
    ///
    /// Accepts `local@domain.tld` where the local part uses word characters
    /// and `._%+-`, and the domain ends in a dot followed by two or more letters.
    EmailRule,
    "email",
    "must be a valid email",
    |s| email_regex().is_match(s)
);

string_rule!(
    /// URL format validation rule.
    ///
    /// Accepts `http`, `https` and `ftp` URLs with an optional port and an
    /// optional path, query string or fragment.
    UrlRule,
    "url",
    "must be a valid url",
    |s| url_regex().is_match(s)
);

string_rule!(
    /// ASCII letters only.
    AlphaRule,
    "alpha",
    "must contain only alphabets",
    |s| alpha_regex().is_match(s)
);

string_rule!(
    /// ASCII digits only.
    NumericRule,
    "numeric",
    "must contain only numbers",
    |s| numeric_regex().is_match(s)
);

string_rule!(
    /// ASCII letters and digits only.
    AlphaNumericRule,
    "alpha_numeric",
    "must contain only alphabets and numbers",
    |s| alpha_numeric_regex().is_match(s)
);

string_rule!(
    /// `YYYY-MM-DD` shape. The calendar date itself is not checked.
    DateRule,
    "date",
    "must be a valid date",
    |s| date_regex().is_match(s)
);

string_rule!(
    /// An optional leading `+` followed by 7 to 15 digits.
    PhoneNumberRule,
    "phone_number",
    "must be a valid phone number",
    |s| phone_regex().is_match(s)
);

string_rule!(
    /// Dotted-quad IPv4 address with every octet in `0..=255`.
    IpAddressRule,
    "ip_address",
    "must be a valid IP address",
    |s| s.parse::<Ipv4Addr>().is_ok()
);

/// Caller-supplied pattern rule.
#[derive(Debug, Clone)]
pub struct MatchRule {
    /// The pattern the whole check delegates to
    pub pattern: Regex,
    /// Custom error message
    pub message: Option<String>,
}

impl PartialEq for MatchRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str() && self.message == other.message
    }
}

impl MatchRule {
    /// Message recorded when no custom message is set.
    pub const DEFAULT_MESSAGE: &'static str = "must match the pattern";

    /// Create a rule for `pattern`.
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for MatchRule {
    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        let Value::Str(s) = value else {
            return Ok(());
        };
        if self.pattern.is_match(s) {
            return Ok(());
        }
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| Self::DEFAULT_MESSAGE.to_string());
        Err(RuleError::new("match", message))
    }

    fn rule_name(&self) -> &'static str {
        "match"
    }
}
