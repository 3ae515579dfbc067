//! OS keychain credential store.

use keyring::Entry;
use tracing::warn;

use snippetlog_core::{CredentialKey, CredentialStore, MemoryCredentialStore};

/// Keychain service name used when none is given.
const SERVICE_NAME: &str = "snippetlog";

/// A [`CredentialStore`] backed by the platform keychain.
///
/// Each key is one keychain entry under the configured service. A memory
/// copy shadows every write so the session keeps working when the keychain
/// is locked or missing.
#[derive(Debug)]
pub struct KeyringCredentialStore {
    service: String,
    cache: MemoryCredentialStore,
}

impl KeyringCredentialStore {
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    /// Use a custom keychain service name.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            cache: MemoryCredentialStore::new(),
        }
    }

    fn entry(&self, key: CredentialKey) -> keyring::Result<Entry> {
        Entry::new(&self.service, key.as_str())
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        match self.entry(key).and_then(|entry| entry.get_password()) {
            Ok(value) => Some(value),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(error = %e, key = %key, "Keychain read failed, using memory copy");
                self.cache.get(key)
            }
        }
    }

    fn set(&self, key: CredentialKey, value: &str) {
        self.cache.set(key, value);
        if let Err(e) = self.entry(key).and_then(|entry| entry.set_password(value)) {
            warn!(error = %e, key = %key, "Failed to store credential in keychain");
        }
    }

    fn remove(&self, key: CredentialKey) {
        self.cache.remove(key);
        match self.entry(key).and_then(|entry| entry.delete_credential()) {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(e) => warn!(error = %e, key = %key, "Failed to delete credential from keychain"),
        }
    }
}
