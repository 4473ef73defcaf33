//! Variable environment
//!
//! The pseudocode language has a single flat scope: every variable lives in one
//! [`Environment`] for the whole run, and assigning to a name simply replaces whatever
//! was stored there before (including its kind).

use super::value::Value;
use rustc_hash::FxHashMap;

/// Mapping from variable names to their current values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.variables.get_mut(name)
    }

    /// Store a value, returning the one it replaced
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over all variables in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Environment {
            variables: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
