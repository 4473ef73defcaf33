//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents all possible runtime values
//! of the pseudocode language. Values are tagged; the tag is what the interpreter checks
//! at run time instead of a static type.
//!
//! # Value Types
//!
//! - [`Value::Integer`]: 64-bit signed integer
//! - [`Value::Float`]: 64-bit float
//! - [`Value::Boolean`]: result of relational operators and loop/branch conditions
//! - [`Value::Array`]: ordered sequence of values
//!
//! # Homogeneity
//!
//! Nothing in the type stops an array from mixing kinds. Homogeneity is enforced by the
//! interpreter when an array is read from the input table or written element by element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<Value>),
}

/// The tag of a [`Value`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Integer,
    Float,
    Boolean,
    Array,
}

impl Value {
    /// Build an array value from anything convertible into values
    pub fn array<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Get the integer value, returns None if not an Integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the numeric value as a float, returns None for booleans and arrays
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Get the boolean value, returns None if not a Boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the elements, returns None if not an Array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

/// Formats a float so that integral values keep a trailing `.0`, at any magnitude
pub(crate) fn format_float(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        x.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}
