// Execution engine for the pseudocode interpreter

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::terminal::Terminal;
use crate::memory::{Environment, Value};
use crate::program::ast::{Statement, StatementKind};
use crate::program::Program;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Executes pseudocode programs
///
/// One interpreter owns the state of one run. After [`Interpreter::execute`] returns,
/// successfully or not, the environment and output stay available for inspection.
pub struct Interpreter {
    /// Values supplied by the caller for `Input` statements
    inputs: FxHashMap<String, Value>,

    /// The single flat variable scope
    environment: Environment,

    /// Captured `Output` text
    terminal: Terminal,

    /// Labels of the loops currently executing, innermost last
    pub(crate) loop_labels: Vec<String>,

    /// Label of a `Break` that has not yet been consumed by its loop
    pub(crate) pending_break: Option<String>,
}

impl Interpreter {
    /// Create an interpreter reading `Input` values from `inputs`
    pub fn new<S: BuildHasher>(inputs: &HashMap<String, Value, S>) -> Self {
        Interpreter {
            inputs: inputs
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            environment: Environment::new(),
            terminal: Terminal::new(),
            loop_labels: Vec::new(),
            pending_break: None,
        }
    }

    /// Run the program from start to finish
    pub fn execute(&mut self, program: &Program) -> Result<(), RuntimeError> {
        let result = self.execute_block(program.statements());
        tracing::debug!(
            variables = self.environment.len(),
            ok = result.is_ok(),
            "run finished"
        );
        for (name, value) in self.environment.iter() {
            tracing::trace!(name, %value, "variable");
        }
        result
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub(crate) fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }

    pub(crate) fn input_value(&self, name: &str) -> Option<&Value> {
        self.inputs.get(name)
    }

    /// Everything printed so far
    pub fn output(&self) -> String {
        self.terminal.contents()
    }

    /// Execute statements in order, stopping early once a break is in flight
    pub fn execute_block(&mut self, block: &[Statement]) -> Result<(), RuntimeError> {
        for stmt in block {
            self.execute_statement(stmt)?;
            if self.pending_break.is_some() {
                break;
            }
        }
        Ok(())
    }

    /// Execute a single statement
    fn execute_statement(&mut self, stmt: &Statement) -> Result<(), RuntimeError> {
        tracing::trace!(statement = stmt.kind_name(), "execute");

        match &stmt.kind {
            StatementKind::Input { target, input_type } => self.execute_input(target, input_type),

            StatementKind::Output { text } => {
                self.execute_output(text);
                Ok(())
            }

            StatementKind::Assign { target, value } => self.execute_assignment(target, value),

            StatementKind::If {
                condition,
                then_block,
                else_block,
            } => self.execute_if(condition, then_block, else_block.as_deref()),

            StatementKind::While {
                condition,
                body,
                label,
            } => self.execute_while(condition, body, label.as_deref()),

            StatementKind::DoWhile {
                body,
                condition,
                label,
            } => self.execute_do_while(body, condition, label.as_deref()),

            StatementKind::Loop { body, label } => self.execute_loop(body, label.as_deref()),

            StatementKind::Break { label } => self.execute_break(label),

            // The caption only matters to the diagram
            StatementKind::DocumentedBlock { block, .. } => self.execute_block(block),

            StatementKind::Match { value, arms } => self.execute_match(value, arms),
        }
    }

    /// Interpret a condition value, which must be a boolean
    pub(crate) fn value_to_bool(value: &Value) -> Result<bool, RuntimeError> {
        value
            .as_bool()
            .ok_or(RuntimeError::ConditionType { got: value.kind() })
    }
}
