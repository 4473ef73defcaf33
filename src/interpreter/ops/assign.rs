use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::expressions::{checked_index, lookup_array};
use crate::memory::value::Value;
use crate::program::ast::{AssignTarget, Expression};

impl Interpreter {
    pub(crate) fn execute_assignment(
        &mut self,
        target: &AssignTarget,
        value: &Expression,
    ) -> Result<(), RuntimeError> {
        let value = value.evaluate(self.environment())?;
        match target {
            // No type check: a variable takes whatever kind it is given.
            AssignTarget::Variable(name) => {
                self.environment_mut().set(name.as_str(), value);
                Ok(())
            }
            AssignTarget::Element { array, index } => self.assign_element(array, index, value),
        }
    }

    /// Write one element of an existing array in place
    fn assign_element(
        &mut self,
        array: &str,
        index: &Expression,
        value: Value,
    ) -> Result<(), RuntimeError> {
        let position = {
            let items = lookup_array(self.environment(), array)?;
            let index_val = index.evaluate(self.environment())?;
            let position = checked_index(array, &index_val, items.len())?;

            let expected = items[position].kind();
            if value.kind() != expected {
                return Err(RuntimeError::HeterogeneousArray {
                    array: array.to_string(),
                    expected,
                    got: value.kind(),
                });
            }
            position
        };

        if let Some(Value::Array(items)) = self.environment_mut().get_mut(array) {
            items[position] = value;
        }
        Ok(())
    }
}
