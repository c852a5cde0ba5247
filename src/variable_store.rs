use parking_lot::RwLock;
use std::collections::HashMap;

use crate::{read_lock_or_return, write_lock_or_noop};

const TAG: &str = "VariableStore";

/// Host-managed variable state. The real store belongs to the surrounding
/// host framework; embedded usage and tests get [`InMemoryVariableStore`].
pub trait VariableStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
    fn put(&self, name: &str, value: String);
}

#[derive(Default)]
pub struct InMemoryVariableStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryVariableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl VariableStore for InMemoryVariableStore {
    fn get(&self, name: &str) -> Option<String> {
        let values = read_lock_or_return!(TAG, self.values, None);
        values.get(name).cloned()
    }

    fn put(&self, name: &str, value: String) {
        let mut values = write_lock_or_noop!(TAG, self.values);
        values.insert(name.to_string(), value);
    }
}
