use std::sync::Arc;

use hostfn_rust::{InMemoryVariableStore, VariableStore};

#[test]
fn test_put_and_get() {
    let store = InMemoryVariableStore::new();

    store.put("name", "value".to_string());
    assert_eq!(store.get("name"), Some("value".to_string()));
}

#[test]
fn test_get_missing() {
    let store = InMemoryVariableStore::new();

    assert_eq!(store.get("missing"), None);
}

#[test]
fn test_put_overwrites() {
    let store = InMemoryVariableStore::new();

    store.put("name", "first".to_string());
    store.put("name", "second".to_string());

    assert_eq!(store.get("name"), Some("second".to_string()));
}

#[test]
fn test_concurrent_puts() {
    let store: Arc<dyn VariableStore> = Arc::new(InMemoryVariableStore::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                store.put(&format!("key_{i}"), format!("value_{i}"));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..8 {
        assert_eq!(
            store.get(&format!("key_{i}")),
            Some(format!("value_{i}"))
        );
    }
}
