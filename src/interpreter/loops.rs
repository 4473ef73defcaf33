//! Loop statement execution (`While`, `DoWhile`, `Loop`).
//!
//! Adds `impl Interpreter` methods for the three loop forms. A loop's label, if it has
//! one, sits on the label stack while the loop runs so that a nested `Break` can name it.
//!
//! A `Break` does not unwind directly. It sets the pending-break register, every block
//! stops after the statement that set it, and every loop exits after a body execution
//! that leaves it set. The loop whose label matches clears the register; loops in between
//! leave it set so the break keeps propagating outward.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::program::ast::{Expression, Statement};

/// Result returned by [`Interpreter::execute_loop_body`] to signal how the body ended.
pub(crate) enum LoopBodyResult {
    /// Body completed normally; the loop may iterate again.
    Continue,
    /// A break is in flight and the loop must exit.
    Exit,
}

impl Interpreter {
    /// Executes one iteration of a loop body.
    pub(crate) fn execute_loop_body(
        &mut self,
        body: &[Statement],
    ) -> Result<LoopBodyResult, RuntimeError> {
        self.execute_block(body)?;
        if self.pending_break.is_some() {
            Ok(LoopBodyResult::Exit)
        } else {
            Ok(LoopBodyResult::Continue)
        }
    }

    fn enter_loop(&mut self, label: Option<&str>) {
        if let Some(label) = label {
            tracing::debug!(label, "enter labeled loop");
            self.loop_labels.push(label.to_string());
        }
    }

    /// Consume a break aimed at this loop and pop its label
    fn exit_loop(&mut self, label: Option<&str>) {
        if let Some(label) = label {
            if self.pending_break.as_deref() == Some(label) {
                tracing::debug!(label, "break consumed");
                self.pending_break = None;
            }
            self.loop_labels.pop();
        }
    }

    /// Runs `body` and pops the loop label even when `body` fails.
    fn with_loop_label<F>(&mut self, label: Option<&str>, body: F) -> Result<(), RuntimeError>
    where
        F: FnOnce(&mut Self) -> Result<(), RuntimeError>,
    {
        self.enter_loop(label);
        let result = body(self);
        self.exit_loop(label);
        result
    }

    fn evaluate_condition(&self, condition: &Expression) -> Result<bool, RuntimeError> {
        let cond_val = condition.evaluate(self.environment())?;
        Self::value_to_bool(&cond_val)
    }

    /// Executes a pre-tested loop.
    ///
    /// The condition is evaluated before each iteration.
    pub(crate) fn execute_while(
        &mut self,
        condition: &Expression,
        body: &[Statement],
        label: Option<&str>,
    ) -> Result<(), RuntimeError> {
        self.with_loop_label(label, |this| {
            while this.evaluate_condition(condition)? {
                match this.execute_loop_body(body)? {
                    LoopBodyResult::Exit => break,
                    LoopBodyResult::Continue => {}
                }
            }
            Ok(())
        })
    }

    /// Executes a post-tested loop.
    ///
    /// The body always runs at least once; the condition is checked after each
    /// iteration unless a break is in flight.
    pub(crate) fn execute_do_while(
        &mut self,
        body: &[Statement],
        condition: &Expression,
        label: Option<&str>,
    ) -> Result<(), RuntimeError> {
        self.with_loop_label(label, |this| {
            loop {
                if let LoopBodyResult::Exit = this.execute_loop_body(body)? {
                    break;
                }
                if !this.evaluate_condition(condition)? {
                    break;
                }
            }
            Ok(())
        })
    }

    /// Executes an unconditional loop, which only a break can end.
    pub(crate) fn execute_loop(
        &mut self,
        body: &[Statement],
        label: Option<&str>,
    ) -> Result<(), RuntimeError> {
        self.with_loop_label(label, |this| {
            while let LoopBodyResult::Continue = this.execute_loop_body(body)? {}
            Ok(())
        })
    }
}
