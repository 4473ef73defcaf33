//! # Introduction
//!
//! `nassi` runs small imperative pseudocode programs and draws them as
//! Nassi–Shneiderman diagrams. Programs are built directly as trees; there is no
//! source-text parser.
//!
//! ## Pipeline
//!
//! ```text
//!                 ┌→ Interpreter      → output text
//! Program tree ──┤
//!                 └→ DiagramGenerator → Symbol tree → (external renderer)
//! ```
//!
//! 1. [`program`]: expressions, statements, builders, interpolation and rendering.
//! 2. [`interpreter`]: walks the tree against a table of input values.
//! 3. [`memory`]: tagged [`memory::Value`]s and the flat [`memory::Environment`].
//! 4. [`diagram`]: maps the same tree to diagram symbols.
//!
//! ## Example
//!
//! ```
//! use nassi::program::builders::*;
//! use nassi::{PrimitiveType, Program, Statement, Value};
//! use std::collections::HashMap;
//!
//! let program = Program::new(vec![
//!     Statement::input("n", PrimitiveType::Integer),
//!     Statement::assign("n", add(var("n"), int(1))),
//!     Statement::output("{n}"),
//! ])
//! .unwrap();
//!
//! let inputs = HashMap::from([("n".to_string(), Value::Integer(5))]);
//! assert_eq!(program.run(&inputs).unwrap(), "6\n");
//! ```

pub mod diagram;
pub mod interpreter;
pub mod memory;
pub mod program;

pub use diagram::{Diagram, DiagramConfig, Symbol};
pub use interpreter::{Interpreter, RuntimeError};
pub use memory::{Environment, Value, ValueKind};
pub use program::ast::{
    ArrayType, AssignTarget, Block, Expression, InputType, MatchArm, PrimitiveType,
    RelationalOperator, Statement, StatementKind,
};
pub use program::render::Notation;
pub use program::{Program, ProgramError};
