//! Program trees
//!
//! This module defines the data shared by both consumers of a program:
//! - [`ast`]: Expressions, statements and the types an `Input` may declare
//! - [`builders`]: Free functions and constructors for building trees
//! - [`interpolation`]: `{placeholder}` templates used by `Output`
//! - [`render`]: Plain and LaTeX renderings of expressions
//!
//! A [`Program`] is built once and never changes afterwards. Running it and drawing
//! it are independent: [`Program::run`] goes through the [`Interpreter`], while
//! [`Program::to_diagram`] goes through the [`DiagramGenerator`].

pub mod ast;
pub mod builders;
pub mod interpolation;
pub mod render;

use crate::diagram::{Diagram, DiagramConfig, DiagramGenerator};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::Value;
use ast::{Block, Statement, StatementKind};
use std::collections::HashMap;
use std::hash::BuildHasher;
use thiserror::Error;

/// Structural problems detected when a program is constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("If statement with condition '{condition}' has an empty then-block")]
    EmptyThenBlock { condition: String },
}

/// An immutable pseudocode program
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    statements: Block,
}

impl Program {
    /// Wrap a block, rejecting trees that violate structural invariants
    pub fn new(statements: Block) -> Result<Self, ProgramError> {
        check_block(&statements)?;
        Ok(Program { statements })
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Execute the program and return everything it printed
    #[tracing::instrument(level = "debug", skip_all, fields(inputs = inputs.len()))]
    pub fn run<S: BuildHasher>(
        &self,
        inputs: &HashMap<String, Value, S>,
    ) -> Result<String, RuntimeError> {
        let mut interpreter = Interpreter::new(inputs);
        interpreter.execute(self)?;
        Ok(interpreter.output())
    }

    /// Build the diagram with the default configuration
    pub fn to_diagram(&self) -> Diagram {
        self.to_diagram_with(&DiagramConfig::default())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(notation = ?config.notation))]
    pub fn to_diagram_with(&self, config: &DiagramConfig) -> Diagram {
        let generator = DiagramGenerator::new(config);
        Diagram::new(generator.generate_block(&self.statements))
    }
}

fn check_block(block: &[Statement]) -> Result<(), ProgramError> {
    for statement in block {
        match &statement.kind {
            StatementKind::If {
                condition,
                then_block,
                else_block,
            } => {
                if then_block.is_empty() {
                    return Err(ProgramError::EmptyThenBlock {
                        condition: condition.render_math(),
                    });
                }
                check_block(then_block)?;
                if let Some(else_block) = else_block {
                    check_block(else_block)?;
                }
            }
            StatementKind::While { body, .. }
            | StatementKind::DoWhile { body, .. }
            | StatementKind::Loop { body, .. } => check_block(body)?,
            StatementKind::DocumentedBlock { block, .. } => check_block(block)?,
            StatementKind::Match { arms, .. } => {
                for arm in arms {
                    check_block(&arm.body)?;
                }
            }
            StatementKind::Input { .. }
            | StatementKind::Output { .. }
            | StatementKind::Assign { .. }
            | StatementKind::Break { .. } => {}
        }
    }
    Ok(())
}
