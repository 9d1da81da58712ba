//! Validation error types and JSON error format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field name that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failure of a single rule, before it is attributed to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleError {
    /// Name of the rule that failed (e.g. "email", "min")
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
    fields: Vec<FieldError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

/// All field errors of a finished session.
///
/// Serializes to:
///
/// ```json
/// {
///   "error": {
///     "type": "validation_error",
///     "message": "Validation failed",
///     "fields": [{"field": "email", "message": "must be a valid email"}]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}: {} field error(s)", .fields.len())]
pub struct ValidationError {
    /// Collection of field-level validation errors
    pub fields: Vec<FieldError>,
    /// Summary message (default: "Validation failed")
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error with field errors.
    pub fn new(fields: Vec<FieldError>) -> Self {
        Self {
            fields,
            message: "Validation failed".to_string(),
        }
    }

    /// Create a validation error with a custom summary message.
    pub fn with_message(fields: Vec<FieldError>, message: impl Into<String>) -> Self {
        Self {
            fields,
            message: message.into(),
        }
    }

    /// Check if there are any field errors.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of field errors.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Errors recorded for one field, in the order they were appended.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.fields.iter().filter(move |e| e.field == field)
    }
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let wrapper = ErrorWrapper {
            error: ErrorBody {
                error_type: "validation_error".to_string(),
                message: self.message.clone(),
                fields: self.fields.clone(),
            },
        };
        wrapper.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidationError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wrapper = ErrorWrapper::deserialize(deserializer)?;
        Ok(Self {
            fields: wrapper.error.fields,
            message: wrapper.error.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_creation() {
        let error = FieldError::new("email", "must be a valid email");
        assert_eq!(error.field, "email");
        assert_eq!(error.message, "must be a valid email");
    }

    #[test]
    fn validation_error_serialization() {
        let error = ValidationError::new(vec![FieldError::new("email", "must be a valid email")]);

        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["error"]["type"], "validation_error");
        assert_eq!(json["error"]["message"], "Validation failed");
        assert_eq!(json["error"]["fields"][0]["field"], "email");
        assert_eq!(json["error"]["fields"][0]["message"], "must be a valid email");
    }

    #[test]
    fn validation_error_deserializes_from_envelope() {
        let json = r#"{
            "error": {
                "type": "validation_error",
                "message": "Signup rejected",
                "fields": [{"field": "age", "message": "must be greater than or equal to 18"}]
            }
        }"#;

        let error: ValidationError = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Signup rejected");
        assert_eq!(error.len(), 1);
        assert_eq!(error.fields[0].field, "age");
    }

    #[test]
    fn validation_error_display() {
        let error = ValidationError::new(vec![
            FieldError::new("email", "must be a valid email"),
            FieldError::new("age", "field is required"),
        ]);

        assert_eq!(error.to_string(), "Validation failed: 2 field error(s)");
    }

    #[test]
    fn for_field_filters_in_order() {
        let error = ValidationError::with_message(
            vec![
                FieldError::new("a", "first"),
                FieldError::new("b", "other"),
                FieldError::new("a", "second"),
            ],
            "Bad input",
        );

        let messages: Vec<_> = error.for_field("a").map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(error.to_string(), "Bad input: 3 field error(s)");
    }
}
