//! End-to-end behavior of validation sessions.

use fieldcheck::{FieldError, Validator, Value, REQUIRED_MESSAGE};
use regex::Regex;

fn passes(v: &Validator) -> bool {
    v.errors().is_empty()
}

#[test]
fn has_special_char() {
    assert!(passes(Validator::new("field", "test@123").has_special_char()));
    assert!(!passes(Validator::new("field", "test123").has_special_char()));
}

#[test]
fn has_special_char_edge_cases() {
    let cases: [(&str, Value, bool); 6] = [
        ("empty string", Value::from(""), false),
        ("zero int", Value::from(0), false),
        ("zero float", Value::from(0.0), false),
        ("special chars only", Value::from("@#$%"), true),
        ("special chars with number", Value::from("123@#$%"), true),
        ("whitespace only", Value::from("   "), false),
    ];

    for (name, value, expected) in cases {
        let mut v = Validator::new("field", value);
        v.has_special_char();
        assert_eq!(passes(&v), expected, "{name}");
        assert!(v.errors().len() <= 1, "{name}");
    }
}

#[test]
fn has_special_char_counts_non_ascii_whitespace() {
    for input in ["ab\u{00A0}cd", "ab\u{2003}cd", "ab\u{000B}cd"] {
        assert!(passes(Validator::new("field", input).has_special_char()), "{input:?}");
    }
    assert!(!passes(Validator::new("field", "ab\t\ncd").has_special_char()));
}

#[test]
fn email() {
    assert!(passes(Validator::new("field", "test@example.com").email()));
    for input in ["ctrix.com", "ctrix@.com", "@ctrix.com", "invalid-email"] {
        let mut v = Validator::new("field", input);
        v.email();
        assert_eq!(v.errors(), [FieldError::new("field", "must be a valid email")]);
    }
}

#[test]
fn min_and_max_on_strings() {
    assert!(passes(Validator::new("field", "test").min(3)));
    assert!(!passes(Validator::new("field", "te").min(3)));
    assert!(passes(Validator::new("field", "test").max(5)));
    assert!(!passes(Validator::new("field", "test123").max(5)));
}

#[test]
fn min_max_boundary_is_inclusive() {
    assert!(passes(Validator::new("field", "abc").min(3)));
    assert!(passes(Validator::new("field", "abc").max(3)));
    assert!(!passes(Validator::new("field", "abc").min(4)));
    assert!(!passes(Validator::new("field", "abc").max(2)));
    assert!(passes(Validator::new("field", 3).min(3).max(3)));
    assert!(passes(Validator::new("field", 3.0).min(3).max(3)));
}

#[test]
fn min_across_numeric_types() {
    let values = [
        Value::from(42),
        Value::from(42i8),
        Value::from(42i16),
        Value::from(42i32),
        Value::from(42i64),
        Value::from(42u8),
        Value::from(42u16),
        Value::from(42u32),
        Value::from(42u64),
        Value::from(42.0f32),
        Value::from(42.0f64),
    ];

    for value in values {
        let kind = value.kind();
        let mut v = Validator::new("field", value);
        v.min(40);
        assert!(passes(&v), "{kind}");
    }
}

#[test]
fn url() {
    assert!(passes(Validator::new("field", "http://example.com").url()));
    assert!(!passes(Validator::new("field", "invalid-url").url()));
}

#[test]
fn character_classes() {
    assert!(passes(Validator::new("field", "test").alpha()));
    assert!(!passes(Validator::new("field", "test123").alpha()));
    assert!(passes(Validator::new("field", "123").numeric()));
    assert!(!passes(Validator::new("field", "test").numeric()));
    assert!(passes(Validator::new("field", "test123").alpha_numeric()));
    assert!(!passes(Validator::new("field", "test@123").alpha_numeric()));
}

#[test]
fn date() {
    assert!(passes(Validator::new("field", "2023-10-01").date()));
    for input in ["--", "11-12", "invalid-date"] {
        assert!(!passes(Validator::new("field", input).date()), "{input}");
    }
}

#[test]
fn matches() {
    let pattern = Regex::new(r"^[a-z]+$").unwrap();
    assert!(passes(Validator::new("field", "test").matches(&pattern)));

    let mut v = Validator::new("field", "test123");
    v.matches(&pattern);
    assert_eq!(v.errors(), [FieldError::new("field", "must match the pattern")]);
}

#[test]
fn phone_number() {
    assert!(passes(Validator::new("field", "+1234567890").phone_number()));
    assert!(!passes(Validator::new("field", "@+97").phone_number()));
    assert!(!passes(Validator::new("field", "invalid-phone").phone_number()));
}

#[test]
fn credit_card() {
    assert!(passes(Validator::new("field", "4111111111111111").credit_card()));
    assert!(!passes(Validator::new("field", "0000000000000000").credit_card()));

    let mut v = Validator::new("field", "invalid-card");
    v.credit_card();
    assert_eq!(
        v.errors(),
        [FieldError::new("field", "must be a valid credit card number")]
    );
}

#[test]
fn ip_address() {
    assert!(passes(Validator::new("field", "192.168.1.1").ip_address()));

    let mut v = Validator::new("field", "300.300.0.0");
    v.ip_address();
    assert_eq!(v.errors(), [FieldError::new("field", "must be a valid IP address")]);

    assert!(!passes(Validator::new("field", "invalid-ip").ip_address()));
}

#[test]
fn not_required() {
    assert!(passes(Validator::new("field", "").not_required()));
    assert!(passes(Validator::new("field", "").not_required().email()));
    assert!(passes(Validator::new("field", "").not_required().email().min(5)));
    assert!(!passes(Validator::new("field", "invalid").not_required().email()));
}

#[test]
fn untouched_fields_have_no_errors() {
    assert!(passes(&Validator::new("field", "test")));
    assert!(passes(Validator::new("field", "test").next_field("nextField", "nextValue")));
}

#[test]
fn required_empty_field_records_one_error() {
    let mut v = Validator::new("field", "");
    v.email()
        .min(5)
        .max(1)
        .url()
        .alpha()
        .numeric()
        .alpha_numeric()
        .date()
        .phone_number()
        .credit_card()
        .ip_address()
        .has_special_char();

    assert_eq!(v.errors(), [FieldError::new("field", REQUIRED_MESSAGE)]);
}

#[test]
fn failed_field_never_records_twice() {
    let mut v = Validator::new("field", "test");
    v.email().phone_number().url().min(10).credit_card();

    assert_eq!(v.errors(), [FieldError::new("field", "must be a valid email")]);
}

#[test]
fn multiple_validations() {
    assert!(passes(Validator::new("field", "test@example.com").email().min(5).has_special_char()));
    assert!(!passes(Validator::new("field", "test").email().min(5).has_special_char()));
}

#[test]
fn combined_validations() {
    assert!(passes(Validator::new("field", "test@example.com").email().min(10)));
    assert!(passes(Validator::new("field", "+12345678900").phone_number().has_special_char()));
    assert!(!passes(Validator::new("field", "example123com").url().alpha_numeric()));
    assert!(!passes(Validator::new("field", "test").email().phone_number()));
}

#[test]
fn change_error_message() {
    let mut v = Validator::new("field", "");
    v.email();
    v.change_error_message("field", "Custom error message");

    assert_eq!(v.errors(), [FieldError::new("field", "Custom error message")]);
}

#[test]
fn transform_then_validate() {
    let mut v = Validator::new("field", "test");
    v.transform(|value| match value {
        Value::Str(s) => Value::Str(s + " transformed"),
        other => other,
    });
    assert!(passes(&v));
    assert_eq!(v.value(), &Value::from("test transformed"));

    let mut v = Validator::new("name", "test@example.com");
    v.transform(|_| Value::from("invalid-email")).email();
    assert_eq!(v.errors(), [FieldError::new("name", "must be a valid email")]);

    let mut v = Validator::new("name", "test");
    v.transform(|value| Value::from(format!("{value}@example.com")))
        .email();
    assert!(passes(&v));
}

#[test]
fn session_spans_fields() {
    let mut v = Validator::new("email", "test@example.com");
    v.email()
        .next_field("phone", "+1234567890")
        .phone_number()
        .next_field("url", "https://example.com")
        .url();
    assert!(passes(&v));
}

#[test]
fn session_reports_only_the_invalid_field() {
    let valid = [("email", "test@example.com"), ("phone", "+1234567890"), ("url", "https://example.com")];
    let invalid = [
        ("email", "invalid-email", "must be a valid email"),
        ("phone", "invalid-phone", "must be a valid phone number"),
        ("url", "invalid-url", "must be a valid url"),
    ];

    for (bad_field, bad_value, message) in invalid {
        let value_for = |field: &str| {
            if field == bad_field {
                bad_value
            } else {
                valid.iter().find(|(f, _)| *f == field).map(|(_, v)| *v).unwrap()
            }
        };

        let mut v = Validator::new("email", value_for("email"));
        v.email()
            .next_field("phone", value_for("phone"))
            .phone_number()
            .next_field("url", value_for("url"))
            .url();

        assert_eq!(v.errors(), [FieldError::new(bad_field, message)]);
    }
}

#[test]
fn every_invalid_field_is_reported_in_order() {
    let mut v = Validator::new("email", "invalid-email");
    v.email()
        .next_field("phone", "invalid-phone")
        .phone_number()
        .next_field("url", "invalid-url")
        .url();

    let fields: Vec<_> = v.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["email", "phone", "url"]);
}

#[test]
fn optional_values_from_options() {
    let nickname: Option<&str> = None;
    let age: Option<u8> = Some(30);

    let mut v = Validator::new("nickname", nickname);
    v.not_required().alpha().next_field("age", age).min(18).max(120);
    assert!(passes(&v));

    let mut v = Validator::new("nickname", nickname);
    v.alpha();
    assert_eq!(v.errors(), [FieldError::new("nickname", REQUIRED_MESSAGE)]);
}

#[test]
fn json_payload_fields() {
    let payload = serde_json::json!({
        "username": "alice",
        "age": 17,
        "homepage": null,
    });

    let field = |name: &str| Value::try_from(payload[name].clone()).unwrap();

    let mut v = Validator::new("username", field("username"));
    v.alpha_numeric()
        .min(3)
        .next_field("age", field("age"))
        .min(18)
        .next_field("homepage", field("homepage"))
        .not_required()
        .url();

    let err = v.into_result().unwrap_err();
    assert_eq!(
        err.fields,
        [FieldError::new("age", "must be greater than or equal to 18")]
    );
}

#[test]
fn logs_through_a_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fieldcheck=trace")
        .with_test_writer()
        .try_init();

    let mut v = Validator::new("field", "");
    v.email().next_field("other", "x").not_required().numeric();
    assert_eq!(v.errors().len(), 2);
}
