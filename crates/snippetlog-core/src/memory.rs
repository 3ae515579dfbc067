//! In-memory credential store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::traits::{CredentialKey, CredentialStore};

/// A [`CredentialStore`] that lives only as long as the process.
///
/// Used in tests and as the fallback when no persistent backend is usable.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<CredentialKey, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (CredentialKey, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    /// Returns true if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
            .cloned()
    }

    fn set(&self, key: CredentialKey, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, value.to_string());
    }

    fn remove(&self, key: CredentialKey) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&key);
    }
}
