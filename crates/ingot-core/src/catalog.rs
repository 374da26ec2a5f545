//! Catalog of domain objects resolved by catalog-backed converters.
//!
//! The catalog itself is owned by the embedding application (for example a
//! custom item registry); the core only reads it. Keys conventionally use a
//! `family:variant` shape such as `"sword:diamond"`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry in a catalog: a keyed domain object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique lookup key, e.g. `"sword:diamond"`.
    pub key: String,
    /// Display name shown to command issuers.
    pub display_name: String,
    /// Host-defined payload attached to the entry.
    #[serde(default)]
    pub data: Value,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            data: Value::Null,
        }
    }

    /// Attaches a host-defined payload.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

/// Read-only view of a keyed catalog.
///
/// Converters call this concurrently from completion paths, so
/// implementations must be `Send + Sync` and must not block.
pub trait CatalogLookup: Send + Sync {
    /// Returns the entry for `key`, if present.
    fn get(&self, key: &str) -> Option<CatalogEntry>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns every key in the catalog's iteration order.
    ///
    /// Completion output is derived from this, so implementations should keep
    /// the order stable across calls.
    fn keys(&self) -> Vec<String>;
}

/// In-memory catalog backed by a `BTreeMap`, so `keys()` is always sorted.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any previous entry under the same key.
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl CatalogLookup for MemoryCatalog {
    fn get(&self, key: &str) -> Option<CatalogEntry> {
        self.entries.get(key).cloned()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
