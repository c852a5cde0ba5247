use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::functions::HostFunction;
use crate::{log_w, read_lock_or_return, write_lock_or_noop, write_lock_or_return};

lazy_static! {
    static ref REGISTRY: RwLock<HashMap<String, Arc<dyn HostFunction>>> =
        RwLock::new(HashMap::new());
}

const TAG: &str = "FunctionRegistry";

/// Process-wide registry of host functions, keyed by reference key.
pub struct FunctionRegistry;

impl FunctionRegistry {
    /// Registers a function under its reference key and returns the key.
    /// Returns `None` when the registry lock cannot be acquired.
    pub fn register(function: Arc<dyn HostFunction>) -> Option<String> {
        let key = function.reference_key().to_string();

        let mut registry = write_lock_or_return!(TAG, REGISTRY, None);
        if registry.insert(key.clone(), function).is_some() {
            log_w!(TAG, "Replaced existing registration for {}", key);
        }

        Some(key)
    }

    #[must_use]
    pub fn get(key: &str) -> Option<Arc<dyn HostFunction>> {
        let registry = read_lock_or_return!(TAG, REGISTRY, None);
        registry.get(key).cloned()
    }

    pub fn remove(key: &str) {
        let mut registry = write_lock_or_noop!(TAG, REGISTRY);
        registry.remove(key);
    }

    pub fn remove_all() {
        let mut registry = write_lock_or_noop!(TAG, REGISTRY);
        registry.clear();
    }
}
