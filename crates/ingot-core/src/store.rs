//! Persisted key/value surface shared with extensions.
//!
//! Persistence itself is out of scope for this core; the runtime context only
//! carries a handle so extensions can reach whatever backend the embedding
//! application wired in.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Key/value store handle passed to extensions through the runtime context.
pub trait DataStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn put(&self, key: &str, value: &str);

    /// Removes `key`, returning the previous value if there was one.
    fn remove(&self, key: &str) -> Option<String>;
}

/// Volatile in-memory store, used as the default backend and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) -> Option<String> {
        self.entries.write().remove(key)
    }
}
