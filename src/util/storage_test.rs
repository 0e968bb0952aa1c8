use super::*;

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("darkMode"), None);
}

#[test]
fn memory_storage_overwrites_values() {
    let mut store = MemoryStorage::new();
    store.set("darkMode", "true").unwrap();
    store.set("darkMode", "false").unwrap();
    assert_eq!(store.get("darkMode").as_deref(), Some("false"));
}

#[test]
fn memory_storage_keys_are_independent() {
    let mut store = MemoryStorage::new();
    store.set("a", "1").unwrap();
    assert_eq!(store.get("b"), None);
}

#[test]
fn memory_storage_works_behind_trait_object() {
    let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStorage::new());
    store.set("darkMode", "true").unwrap();
    assert_eq!(store.get("darkMode").as_deref(), Some("true"));
}
