//! The dynamically-typed value under test.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A value handed to a [`Validator`](crate::Validator).
///
/// Every Rust integer width converts into [`Value::Signed`] or
/// [`Value::Unsigned`], both float widths convert into [`Value::Float`], and
/// `Option::None` converts into [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Text
    Str(String),
    /// Any signed integer
    Signed(i64),
    /// Any unsigned integer
    Unsigned(u64),
    /// Any float
    Float(f64),
    /// Absent value
    #[default]
    Null,
}

impl Value {
    /// Whether the gate treats this value as missing.
    ///
    /// Empty strings, zero numbers and `Null` are empty. Whitespace-only
    /// strings and `NaN` are not.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Str(s) => s.is_empty(),
            Value::Signed(n) => *n == 0,
            Value::Unsigned(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
            Value::Null => true,
        }
    }

    /// Borrow the text of a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Signed(_) => "signed",
            Value::Unsigned(_) => "unsigned",
            Value::Float(_) => "float",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Signed(n) => write!(f, "{n}"),
            Value::Unsigned(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::$variant(n as $target)
                }
            }
        )+
    };
}

impl_from_number!(Signed as i64: i8, i16, i32, i64, isize);
impl_from_number!(Unsigned as u64: u8, u16, u32, u64, usize);
impl_from_number!(Float as f64: f32, f64);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// A JSON value with no [`Value`] counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported JSON value: {kind}")]
pub struct ValueError {
    /// JSON kind that was rejected (`bool`, `array` or `object`)
    pub kind: &'static str,
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;

        match value {
            Json::String(s) => Ok(Value::Str(s)),
            Json::Null => Ok(Value::Null),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Signed(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::Unsigned(u))
                } else {
                    // serde_json numbers are always one of i64, u64 or f64
                    Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Json::Bool(_) => Err(ValueError { kind: "bool" }),
            Json::Array(_) => Err(ValueError { kind: "array" }),
            Json::Object(_) => Err(ValueError { kind: "object" }),
        }
    }
}
