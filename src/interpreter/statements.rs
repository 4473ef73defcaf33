//! Statement execution implementation
//!
//! This module handles the simple statement types:
//!
//! - `Input`: reading a value from the caller's input table
//! - `Output`: printing an interpolated line
//! - `If`: two-way selection
//!
//! Loops live in [`loops`](super::loops), `Break` and `Match` in [`jumps`](super::jumps),
//! and assignment in [`ops::assign`](super::ops::assign).
//!
//! # Input validation
//!
//! Scalar inputs must have exactly the declared kind; an integer is not accepted
//! where a float is declared. Array inputs are read whole and must have the declared
//! element kind and exactly the declared length. A length given by variable name is
//! looked up in the environment at the time the `Input` executes.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::program::ast::{ArrayLength, ArrayType, Expression, InputType, Statement};
use crate::program::interpolation::InterpolatedString;

impl Interpreter {
    pub(crate) fn execute_input(
        &mut self,
        target: &str,
        input_type: &InputType,
    ) -> Result<(), RuntimeError> {
        let value = self
            .input_value(target)
            .cloned()
            .ok_or_else(|| RuntimeError::MissingInput {
                name: target.to_string(),
            })?;

        self.check_input_type(target, input_type, &value)?;
        self.environment_mut().set(target, value);
        Ok(())
    }

    fn check_input_type(
        &self,
        target: &str,
        input_type: &InputType,
        value: &Value,
    ) -> Result<(), RuntimeError> {
        let mismatch = |expected: String| RuntimeError::InputTypeMismatch {
            name: target.to_string(),
            expected,
            got: value.to_string(),
        };

        match input_type {
            InputType::Primitive(primitive) => {
                if primitive.admits(value) {
                    Ok(())
                } else {
                    Err(mismatch(primitive.to_string()))
                }
            }
            InputType::Array(array_type) => {
                let Some(items) = value.as_array() else {
                    return Err(mismatch(input_type.to_string()));
                };

                let length = self.resolve_array_length(target, array_type)?;
                if items.len() != length {
                    return Err(mismatch(format!(
                        "array of length {}",
                        length
                    )));
                }
                if let Some(bad) = items.iter().find(|item| !array_type.element.admits(item)) {
                    return Err(RuntimeError::InputTypeMismatch {
                        name: target.to_string(),
                        expected: format!("array of {} elements", array_type.element),
                        got: format!("element {}", bad),
                    });
                }
                Ok(())
            }
        }
    }

    fn resolve_array_length(
        &self,
        target: &str,
        array_type: &ArrayType,
    ) -> Result<usize, RuntimeError> {
        match &array_type.length {
            ArrayLength::Fixed(n) => Ok(*n),
            ArrayLength::Variable(name) => {
                let length_value =
                    self.environment()
                        .get(name)
                        .ok_or_else(|| RuntimeError::UndefinedVariable {
                            name: name.clone(),
                        })?;
                length_value
                    .as_int()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| RuntimeError::InputTypeMismatch {
                        name: target.to_string(),
                        expected: format!("a length in variable '{}'", name),
                        got: length_value.to_string(),
                    })
            }
        }
    }

    pub(crate) fn execute_output(&mut self, text: &InterpolatedString) {
        let line = text.interpolate(self.environment());
        tracing::trace!(output = %line, "print");
        self.terminal_mut().println(line);
    }

    pub(crate) fn execute_if(
        &mut self,
        condition: &Expression,
        then_branch: &[Statement],
        else_branch: Option<&[Statement]>,
    ) -> Result<(), RuntimeError> {
        let cond_val = condition.evaluate(self.environment())?;
        let cond_bool = Self::value_to_bool(&cond_val)?;

        if cond_bool {
            self.execute_block(then_branch)
        } else if let Some(else_stmts) = else_branch {
            self.execute_block(else_stmts)
        } else {
            Ok(())
        }
    }
}
