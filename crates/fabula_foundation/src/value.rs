//! Scalar values stored in save-state diffs.
//!
//! Only scalar record fields take part in save/restore. Computed text,
//! hooks, and response tables are rebuilt from module data instead.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A scalar field value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Absent value.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// Text value.
    Text(String),
}

impl Value {
    /// Returns true if this is `Nil`.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Conversion between a record field and its diff representation.
pub trait FieldValue: Sized {
    /// Converts the field into a diff value.
    fn to_value(&self) -> Value;

    /// Reads the field back from a diff value.
    ///
    /// # Errors
    ///
    /// Returns a `FieldType` error if the value has the wrong shape.
    fn from_value(field: &str, value: Value) -> Result<Self>;
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            // Unset booleans come back as nil from older saves
            Value::Nil => Ok(false),
            _ => Err(Error::field_type(field, "a boolean")),
        }
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            Value::Nil => Ok(String::new()),
            _ => Err(Error::field_type(field, "text")),
        }
    }
}

impl FieldValue for Option<String> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Nil, |s| Value::Text(s.clone()))
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(Some(s)),
            Value::Nil => Ok(None),
            _ => Err(Error::field_type(field, "text or nil")),
        }
    }
}

impl FieldValue for u32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Int(n) => u32::try_from(n).map_err(|_| Error::field_type(field, "a count")),
            _ => Err(Error::field_type(field, "a count")),
        }
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(_field: &str, value: Value) -> Result<Self> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn option_string_round_trips_nil() {
        let none: Option<String> = None;
        assert_eq!(none.to_value(), Value::Nil);
        assert_eq!(Option::<String>::from_value("brief", Value::Nil).unwrap(), None);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let err = bool::from_value("open", Value::Text("yes".into())).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::FieldType { .. }));
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(u32::from_value("max_carried", Value::Int(-1)).is_err());
        assert_eq!(u32::from_value("max_carried", Value::Int(12)).unwrap(), 12);
    }
}
