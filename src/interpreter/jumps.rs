use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops::binary::apply_binary_op;
use crate::program::ast::{BinaryOperator, Expression, MatchArm};

impl Interpreter {
    pub(crate) fn execute_break(&mut self, label: &str) -> Result<(), RuntimeError> {
        if !self.loop_labels.iter().any(|open| open == label) {
            return Err(RuntimeError::InvalidBreakLabel {
                label: label.to_string(),
            });
        }

        tracing::debug!(label, "break");
        self.pending_break = Some(label.to_string());
        Ok(())
    }

    /// Runs the body of the first arm whose comparison holds. Arms do not fall through.
    pub(crate) fn execute_match(
        &mut self,
        value: &Expression,
        arms: &[MatchArm],
    ) -> Result<(), RuntimeError> {
        let match_val = value.evaluate(self.environment())?;

        for arm in arms {
            let arm_val = arm.compare.evaluate(self.environment())?;
            let op = BinaryOperator::from(arm.operator);
            let satisfied = apply_binary_op(op, &match_val, &arm_val)?;
            if satisfied.as_bool() == Some(true) {
                return self.execute_block(&arm.body);
            }
        }

        Err(RuntimeError::UnexhaustiveMatch { value: match_val })
    }
}
