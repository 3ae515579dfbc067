//! snippetlog-store - Persistent [`CredentialStore`] backends.
//!
//! [`FileCredentialStore`] keeps the three session entries in a JSON file
//! with owner-only permissions. With the `keyring` feature,
//! [`KeyringCredentialStore`] keeps them in the OS keychain instead.
//!
//! [`CredentialStore`]: snippetlog_core::CredentialStore

mod file;
#[cfg(feature = "keyring")]
mod keychain;

pub use file::FileCredentialStore;
#[cfg(feature = "keyring")]
pub use keychain::KeyringCredentialStore;
