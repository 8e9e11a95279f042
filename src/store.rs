//! Persisted key-value storage
//!
//! The page keeps a single entry (`perform_mode`) in LocalStorage. The
//! controller only sees this trait, so tests and the native build run
//! against `MemoryStore`.

use std::collections::HashMap;

/// Durable string key-value storage scoped to the page origin
pub trait ModeStore {
    /// Read a value, `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value; failures are logged, never surfaced
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ModeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::with_entry("perform_mode", "goals");
        store.set("perform_mode", "self");
        assert_eq!(store.get("perform_mode").as_deref(), Some("self"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("missing"), None);
    }
}
