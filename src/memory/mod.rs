//! Memory model for the pseudocode interpreter
//!
//! This module provides the run-time data the interpreter works on:
//! - [`value`]: Runtime value representation (Integer, Float, Boolean, Array)
//! - [`environment`]: The single flat scope mapping variable names to values
//!
//! # Typing
//!
//! The language is dynamically typed. A variable has no declared type; its kind is the
//! kind of whatever value was last stored under its name. The only static type
//! information in a program is the declared type of an `Input` statement.

pub mod environment;
pub mod value;

pub use environment::Environment;
pub use value::{Value, ValueKind};
