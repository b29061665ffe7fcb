use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::PlannerResult;

/// In-process backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PlannerResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PlannerResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
