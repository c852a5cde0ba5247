use std::sync::{Arc, Mutex, MutexGuard};

use hostfn_rust::{
    ExecutionContext, FunctionRegistry, HostFnErr, HostFunction, InMemoryVariableStore,
};
use lazy_static::lazy_static;

lazy_static! {
    static ref TEST_MUTEX: Mutex<()> = Mutex::new(());
}

fn get_test_lock() -> MutexGuard<'static, ()> {
    let guard = TEST_MUTEX.lock().unwrap();

    FunctionRegistry::remove_all();

    guard
}

struct EchoFunction {
    output: &'static str,
}

impl EchoFunction {
    fn new(output: &'static str) -> Self {
        Self { output }
    }
}

impl HostFunction for EchoFunction {
    fn reference_key(&self) -> &'static str {
        "__ECHO"
    }

    fn argument_desc(&self) -> &'static [&'static str] {
        &["String to echo"]
    }

    fn set_parameters(&self, _parameters: Vec<String>) -> Result<(), HostFnErr> {
        Ok(())
    }

    fn execute(&self, _context: &ExecutionContext) -> Result<String, HostFnErr> {
        Ok(self.output.to_string())
    }
}

#[test]
fn test_register_and_get() {
    let _lock = get_test_lock();

    let key = FunctionRegistry::register(Arc::new(EchoFunction::new("echo"))).unwrap();
    assert_eq!(key, "__ECHO");

    let retrieved = FunctionRegistry::get(&key);
    assert!(retrieved.is_some());
    assert_eq!(retrieved.unwrap().reference_key(), "__ECHO");
}

#[test]
fn test_get_unregistered_key() {
    let _lock = get_test_lock();

    assert!(FunctionRegistry::get("__MISSING").is_none());
}

#[test]
fn test_remove() {
    let _lock = get_test_lock();

    let key = FunctionRegistry::register(Arc::new(EchoFunction::new("echo"))).unwrap();

    FunctionRegistry::remove(&key);
    assert!(FunctionRegistry::get(&key).is_none());
}

#[test]
fn test_reregistration_replaces() {
    let _lock = get_test_lock();

    FunctionRegistry::register(Arc::new(EchoFunction::new("first"))).unwrap();
    FunctionRegistry::register(Arc::new(EchoFunction::new("second"))).unwrap();

    let retrieved = FunctionRegistry::get("__ECHO").unwrap();
    let context = ExecutionContext::new(Arc::new(InMemoryVariableStore::new()));
    assert_eq!(retrieved.execute(&context).unwrap(), "second");
}

#[test]
fn test_remove_all() {
    let _lock = get_test_lock();

    FunctionRegistry::register(Arc::new(EchoFunction::new("echo"))).unwrap();
    FunctionRegistry::remove_all();

    assert!(FunctionRegistry::get("__ECHO").is_none());
}
