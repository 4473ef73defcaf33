//! Expression evaluation implementation
//!
//! This module evaluates every expression variant against an [`Environment`]:
//!
//! - Literals (integers, floats, booleans)
//! - Variable references
//! - Array element references
//! - Binary operators (arithmetic and comparison)
//!
//! Evaluation only reads the environment. All arithmetic is checked, so overflow and
//! division by zero become runtime errors rather than panics.

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops::binary::apply_binary_op;
use crate::memory::{Environment, Value};
use crate::program::ast::Expression;

impl Expression {
    /// Evaluate an expression and return its value
    pub fn evaluate(&self, env: &Environment) -> Result<Value, RuntimeError> {
        match self {
            Expression::IntLiteral(n) => Ok(Value::Integer(*n)),

            Expression::FloatLiteral(x) => Ok(Value::Float(*x)),

            Expression::BoolLiteral(b) => Ok(Value::Boolean(*b)),

            Expression::Variable(name) => lookup(env, name).cloned(),

            Expression::ArrayElement { array, index } => {
                let items = lookup_array(env, array)?;
                let index_val = index.evaluate(env)?;
                let position = checked_index(array, &index_val, items.len())?;
                Ok(items[position].clone())
            }

            Expression::Binary { left, op, right } => {
                let left_val = left.evaluate(env)?;
                let right_val = right.evaluate(env)?;
                apply_binary_op(*op, &left_val, &right_val)
            }
        }
    }
}

pub(crate) fn lookup<'a>(env: &'a Environment, name: &str) -> Result<&'a Value, RuntimeError> {
    env.get(name).ok_or_else(|| RuntimeError::UndefinedVariable {
        name: name.to_string(),
    })
}

pub(crate) fn lookup_array<'a>(
    env: &'a Environment,
    name: &str,
) -> Result<&'a [Value], RuntimeError> {
    let value = lookup(env, name)?;
    value.as_array().ok_or_else(|| RuntimeError::NotAnArray {
        name: name.to_string(),
        kind: value.kind(),
    })
}

/// Validate an evaluated index against an array of `length` elements
pub(crate) fn checked_index(
    array: &str,
    index: &Value,
    length: usize,
) -> Result<usize, RuntimeError> {
    let n = index.as_int().ok_or_else(|| RuntimeError::NonIntegerIndex {
        array: array.to_string(),
        got: index.kind(),
    })?;

    usize::try_from(n)
        .ok()
        .filter(|&position| position < length)
        .ok_or_else(|| RuntimeError::IndexOutOfBounds {
            array: array.to_string(),
            index: n,
            length,
        })
}
