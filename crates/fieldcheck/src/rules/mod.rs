//! Validation rules.
//!
//! Every rule inspects a [`Value`] and either accepts it or returns a
//! [`RuleError`] carrying the message to record. Rules never see empty
//! values: the [`Validator`](crate::Validator) gate handles those first.

mod bounds;
mod card;
mod format;

pub use bounds::{MaxRule, MinRule};
pub use card::CreditCardRule;
pub use format::{
    AlphaNumericRule, AlphaRule, DateRule, EmailRule, HasSpecialCharRule, IpAddressRule,
    MatchRule, NumericRule, PhoneNumberRule, UrlRule,
};

use crate::error::RuleError;
use crate::value::Value;
use std::fmt::Debug;

/// Trait for individual validation rules.
///
/// Values of a type the rule does not apply to must be accepted.
///
/// ## Example
///
/// ```rust
/// use fieldcheck::{Rule, RuleError, Validator, Value};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Rule for Even {
///     fn validate(&self, value: &Value) -> Result<(), RuleError> {
///         match value {
///             Value::Signed(n) if n % 2 != 0 => Err(RuleError::new("even", "must be even")),
///             Value::Unsigned(n) if n % 2 != 0 => Err(RuleError::new("even", "must be even")),
///             _ => Ok(()),
///         }
///     }
///
///     fn rule_name(&self) -> &'static str {
///         "even"
///     }
/// }
///
/// let mut v = Validator::new("count", 3);
/// v.check(&Even);
/// assert_eq!(v.errors()[0].message, "must be even");
/// ```
pub trait Rule: Debug {
    /// Validate the value against this rule.
    fn validate(&self, value: &Value) -> Result<(), RuleError>;

    /// Get the rule name for logging.
    fn rule_name(&self) -> &'static str;
}

impl<R: Rule + ?Sized> Rule for &R {
    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        (**self).validate(value)
    }

    fn rule_name(&self) -> &'static str {
        (**self).rule_name()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        (**self).validate(value)
    }

    fn rule_name(&self) -> &'static str {
        (**self).rule_name()
    }
}
