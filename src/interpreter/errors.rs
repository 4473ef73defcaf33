//! Runtime error types for the pseudocode interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while a program runs (as opposed to [`ProgramError`](crate::program::ProgramError),
//! which is raised when a program is constructed).
//!
//! All runtime errors are fatal: they abort the run. The interpreter keeps the
//! environment it had built up to that point so the caller can inspect it.

use crate::memory::value::{Value, ValueKind};
use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// An `Input` target has no entry in the input table
    #[error("Input value for '{name}' required but not provided")]
    MissingInput { name: String },

    /// The supplied input does not match the declared type or length
    #[error("Input '{name}' expected {expected}, got {got}")]
    InputTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// Undefined variable reference
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },

    /// Operand kinds not supported by the operator
    #[error("Type error: unsupported operand kinds for '{operator}': {left} and {right}")]
    TypeError {
        operator: String,
        left: ValueKind,
        right: ValueKind,
    },

    /// Indexed a variable that does not hold an array
    #[error("Variable '{name}' is not an array (holds {kind})")]
    NotAnArray { name: String, kind: ValueKind },

    /// Array index did not evaluate to an integer
    #[error("Index into array '{array}' must be an integer, got {got}")]
    NonIntegerIndex { array: String, got: ValueKind },

    /// Array index out of bounds
    #[error("Index {index} out of bounds for array '{array}' of length {length}")]
    IndexOutOfBounds {
        array: String,
        index: i64,
        length: usize,
    },

    /// Element write would mix kinds within an array
    #[error("Cannot store {got} in array '{array}' of {expected} elements")]
    HeterogeneousArray {
        array: String,
        expected: ValueKind,
        got: ValueKind,
    },

    /// `Break` names a label no open loop carries
    #[error("Invalid break label '{label}'")]
    InvalidBreakLabel { label: String },

    /// No arm of a `Match` accepted the value
    #[error("Match statement is not exhaustive: no arm matches {value}")]
    UnexhaustiveMatch { value: Value },

    /// `If`/loop condition did not evaluate to a boolean
    #[error("Condition must evaluate to a boolean, got {got}")]
    ConditionType { got: ValueKind },

    /// Integer overflow in arithmetic operation
    #[error("Integer overflow in operation: {operation}")]
    IntegerOverflow { operation: String },

    /// Division by zero or modulo by zero
    #[error("Division by zero in operation: {operation}")]
    DivisionByZero { operation: String },
}
