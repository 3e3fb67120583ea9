use super::value::Value;
use std::collections::HashMap;

/// The variables of one interpreter session. Names are validated by the
/// commands that write them, never here.
#[derive(Debug, Default)]
pub struct VariableStore {
    map: HashMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.map.get(name).copied()
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.map.insert(name.to_string(), value);
    }
}
