//! The validation session.

use crate::config::ValidatorConfig;
use crate::error::{FieldError, ValidationError};
use crate::rules::{
    AlphaNumericRule, AlphaRule, CreditCardRule, DateRule, EmailRule, HasSpecialCharRule,
    IpAddressRule, MatchRule, MaxRule, MinRule, NumericRule, PhoneNumberRule, Rule, UrlRule,
};
use crate::serializable::SerializableRule;
use crate::value::Value;
use regex::Regex;
use tracing::{debug, trace, warn};

/// Message recorded when a required field is empty.
pub const REQUIRED_MESSAGE: &str = "field is required";

/// A fluent validation session over one or more fields.
///
/// The session points at one field at a time. Every rule first runs the
/// gate: a field that already failed is skipped, an empty optional field is
/// let through silently, and an empty required field records
/// [`REQUIRED_MESSAGE`]. A field records at most one error per visit.
///
/// ```rust
/// use fieldcheck::Validator;
///
/// let mut v = Validator::new("email", "test@example.com");
/// v.email()
///     .next_field("phone", "+1234567890")
///     .phone_number()
///     .next_field("nickname", "")
///     .not_required()
///     .alpha();
///
/// assert!(v.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    field: String,
    value: Value,
    required: bool,
    blocked: bool,
    errors: Vec<FieldError>,
}

impl Validator {
    /// Start a session at `field`, which is required until
    /// [`not_required`](Self::not_required) is called.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_config(ValidatorConfig::default(), field, value)
    }

    /// Start a session with explicit configuration.
    pub fn with_config(
        config: ValidatorConfig,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            config,
            field: field.into(),
            value: value.into(),
            required: true,
            blocked: false,
            errors: Vec::new(),
        }
    }

    /// Move to the next field, keeping every error recorded so far.
    ///
    /// The new field is required and unblocked.
    pub fn next_field(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.field = field.into();
        self.value = value.into();
        self.required = true;
        self.blocked = false;
        trace!(field = %self.field, "next field");
        self
    }

    /// Let the current field be empty.
    pub fn not_required(&mut self) -> &mut Self {
        self.required = false;
        self
    }

    /// Run the gate. Returns `true` when the rule should run.
    fn gate(&mut self) -> bool {
        if self.blocked {
            return false;
        }
        if !self.value.is_empty() {
            return true;
        }

        self.blocked = true;
        if self.required {
            debug!(field = %self.field, "required field is empty");
            self.errors
                .push(FieldError::new(self.field.clone(), REQUIRED_MESSAGE));
        } else {
            trace!(field = %self.field, "optional field is empty");
        }
        false
    }

    /// Run any rule against the current field.
    pub fn check<R: Rule + ?Sized>(&mut self, rule: &R) -> &mut Self {
        if self.blocked {
            trace!(field = %self.field, rule = rule.rule_name(), "rule skipped");
            return self;
        }
        if !self.gate() {
            return self;
        }

        if let Err(err) = rule.validate(&self.value) {
            debug!(
                field = %self.field,
                rule = err.rule,
                kind = self.value.kind(),
                message = %err.message,
                "field validation failed"
            );
            self.errors
                .push(FieldError::new(self.field.clone(), err.message));
            self.blocked = true;
        }
        self
    }

    /// Run a rule described as data.
    ///
    /// A `match` rule with an invalid pattern is logged and skipped.
    pub fn apply(&mut self, rule: &SerializableRule) -> &mut Self {
        match rule.to_rule(self.config.length_unit) {
            Ok(rule) => self.check(&rule),
            Err(err) => {
                warn!(field = %self.field, error = %err, "skipping rule with invalid pattern");
                self
            }
        }
    }

    /// Run several rules described as data, in order.
    pub fn apply_all<'a, I>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a SerializableRule>,
    {
        for rule in rules {
            self.apply(rule);
        }
        self
    }

    /// Replace the current value with `f(value)` for the rules that follow.
    ///
    /// Gated like a rule: `f` is not called for a blocked or empty field.
    pub fn transform<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(Value) -> Value,
    {
        if self.gate() {
            let value = std::mem::take(&mut self.value);
            self.value = f(value);
        }
        self
    }

    /// Require at least one character outside letters, digits and whitespace.
    pub fn has_special_char(&mut self) -> &mut Self {
        self.check(&HasSpecialCharRule::new())
    }

    /// Require an email address.
    pub fn email(&mut self) -> &mut Self {
        self.check(&EmailRule::new())
    }

    /// Require a string length or number of at least `min`.
    pub fn min(&mut self, min: i64) -> &mut Self {
        let rule = MinRule::new(min).unit(self.config.length_unit);
        self.check(&rule)
    }

    /// Require a string length or number of at most `max`.
    pub fn max(&mut self, max: i64) -> &mut Self {
        let rule = MaxRule::new(max).unit(self.config.length_unit);
        self.check(&rule)
    }

    /// Require an `http`, `https` or `ftp` URL.
    pub fn url(&mut self) -> &mut Self {
        self.check(&UrlRule::new())
    }

    /// Require ASCII letters only.
    pub fn alpha(&mut self) -> &mut Self {
        self.check(&AlphaRule::new())
    }

    /// Require ASCII digits only.
    pub fn numeric(&mut self) -> &mut Self {
        self.check(&NumericRule::new())
    }

    /// Require ASCII letters and digits only.
    pub fn alpha_numeric(&mut self) -> &mut Self {
        self.check(&AlphaNumericRule::new())
    }

    /// Require a `YYYY-MM-DD` string.
    pub fn date(&mut self) -> &mut Self {
        self.check(&DateRule::new())
    }

    /// Require a match of `pattern`.
    pub fn matches(&mut self, pattern: &Regex) -> &mut Self {
        self.check(&MatchRule::new(pattern.clone()))
    }

    /// Require a phone number.
    pub fn phone_number(&mut self) -> &mut Self {
        self.check(&PhoneNumberRule::new())
    }

    /// Require a card number that passes the Luhn checksum.
    pub fn credit_card(&mut self) -> &mut Self {
        self.check(&CreditCardRule::new())
    }

    /// Require a dotted-quad IPv4 address.
    pub fn ip_address(&mut self) -> &mut Self {
        self.check(&IpAddressRule::new())
    }

    /// Rewrite the message of every error recorded so far for `field`.
    pub fn change_error_message(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        let message = message.into();
        for err in self.errors.iter_mut().filter(|e| e.field == field) {
            err.message.clone_from(&message);
        }
        self
    }

    /// Every error of the session, in the order they were recorded.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// `true` while no error has been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the session, returning its errors.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Consume the session, failing if any error was recorded.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }

    /// Name of the current field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Current value, after any transforms.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the current field is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether further rules on the current field are skipped.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Configuration of this session.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}
