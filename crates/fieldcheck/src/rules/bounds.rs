//! Inclusive lower and upper bounds on string length or numeric value.

use super::Rule;
use crate::config::LengthUnit;
use crate::error::RuleError;
use crate::value::Value;
use std::cmp::Ordering;

/// Compare the length or magnitude of `value` against `bound`.
///
/// `None` for values the bound rules do not apply to, and for `NaN`.
fn compare(value: &Value, bound: i64, unit: LengthUnit) -> Option<Ordering> {
    match value {
        Value::Str(s) => Some((unit.measure(s) as i128).cmp(&i128::from(bound))),
        Value::Signed(n) => Some(n.cmp(&bound)),
        Value::Unsigned(n) => Some(i128::from(*n).cmp(&i128::from(bound))),
        Value::Float(f) => f.partial_cmp(&(bound as f64)),
        Value::Null => None,
    }
}

/// Lower bound: strings by length, numbers by value. The bound itself passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinRule {
    /// Smallest accepted length or value
    pub min: i64,
    /// How string length is measured
    pub unit: LengthUnit,
    /// Custom error message
    pub message: Option<String>,
}

impl MinRule {
    /// Create a lower bound measuring strings in characters.
    pub fn new(min: i64) -> Self {
        Self {
            min,
            unit: LengthUnit::default(),
            message: None,
        }
    }

    /// Measure strings in `unit`.
    pub fn unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for MinRule {
    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        if compare(value, self.min, self.unit) != Some(Ordering::Less) {
            return Ok(());
        }
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("must be greater than or equal to {}", self.min));
        Err(RuleError::new("min", message))
    }

    fn rule_name(&self) -> &'static str {
        "min"
    }
}

/// Upper bound: strings by length, numbers by value. The bound itself passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxRule {
    /// Largest accepted length or value
    pub max: i64,
    /// How string length is measured
    pub unit: LengthUnit,
    /// Custom error message
    pub message: Option<String>,
}

impl MaxRule {
    /// Create an upper bound measuring strings in characters.
    pub fn new(max: i64) -> Self {
        Self {
            max,
            unit: LengthUnit::default(),
            message: None,
        }
    }

    /// Measure strings in `unit`.
    pub fn unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for MaxRule {
    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        if compare(value, self.max, self.unit) != Some(Ordering::Greater) {
            return Ok(());
        }
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("must be less than or equal to {}", self.max));
        Err(RuleError::new("max", message))
    }

    fn rule_name(&self) -> &'static str {
        "max"
    }
}
