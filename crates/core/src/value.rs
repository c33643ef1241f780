//! Normalized values handed from the frontends to the target.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated input value.
///
/// Raw input always arrives as text (or as a switch state for flags); verify
/// functions turn it into one of the richer variants.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// No value was given and the parameter has no default.
    Unset,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Path(PathBuf),
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Unset => "unset",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Path(_) => "path",
            Value::List(_) => "list",
        }
    }

    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Unset => Ok(()),
            Value::Bool(b) => write!(formatter, "{b}"),
            Value::Integer(i) => write!(formatter, "{i}"),
            Value::Float(f) => write!(formatter, "{f}"),
            Value::Text(t) => formatter.write_str(t),
            Value::Path(p) => write!(formatter, "{}", p.display()),
            Value::List(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<PathBuf> for Value {
    fn from(value: PathBuf) -> Self {
        Value::Path(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// Conversion from a validated [`Value`] into a typed target field.
pub trait FromValue: Sized {
    /// # Errors
    ///
    /// Returns [`Error::ArgumentType`] if the value has an incompatible variant,
    /// or [`Error::MissingArgument`] if a required value is [`Value::Unset`].
    fn from_value(name: &str, value: Value) -> Result<Self>;
}

fn type_error(name: &str, expected: &'static str, found: &Value) -> Error {
    if found.is_unset() {
        return Error::MissingArgument(name.to_string());
    }

    Error::ArgumentType {
        name: name.to_string(),
        expected,
        found: found.kind().to_string(),
    }
}

impl FromValue for Value {
    fn from_value(_name: &str, value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(name: &str, value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(type_error(name, "boolean", &other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(name: &str, value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(type_error(name, "integer", &other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(name: &str, value: Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            #[allow(clippy::cast_precision_loss)]
            Value::Integer(i) => Ok(i as f64),
            other => Err(type_error(name, "float", &other)),
        }
    }
}

impl FromValue for String {
    fn from_value(name: &str, value: Value) -> Result<Self> {
        match value {
            Value::Text(t) => Ok(t),
            Value::Path(p) => Ok(p.display().to_string()),
            other => Err(type_error(name, "text", &other)),
        }
    }
}

impl FromValue for PathBuf {
    fn from_value(name: &str, value: Value) -> Result<Self> {
        match value {
            Value::Path(p) => Ok(p),
            Value::Text(t) => Ok(PathBuf::from(t)),
            other => Err(type_error(name, "path", &other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(name: &str, value: Value) -> Result<Self> {
        match value {
            Value::Unset => Ok(None),
            other => T::from_value(name, other).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(name: &str, value: Value) -> Result<Self> {
        match value {
            Value::List(values) => values
                .into_iter()
                .map(|value| T::from_value(name, value))
                .collect(),
            Value::Unset => Ok(Vec::new()),
            other => Err(type_error(name, "list", &other)),
        }
    }
}
