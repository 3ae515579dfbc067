//! Core traits shared by the client and the storage backends.

mod credential_store;

pub use credential_store::{CredentialKey, CredentialStore};
