//! snippetlog-core - Core types, errors and the credential storage contract.
//!
//! Everything the client stack shares lives here: validated identifiers,
//! the snippet and user models, secret-bearing token types and the
//! [`CredentialStore`] trait that persistence backends implement.

pub mod credentials;
pub mod error;
pub mod memory;
pub mod models;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use memory::MemoryCredentialStore;
pub use models::{Snippet, SnippetDraft, UserProfile};
pub use tokens::{AccessToken, AuthTokens, RefreshToken};
pub use traits::{CredentialKey, CredentialStore};
pub use types::{ApiUrl, Language, SnippetId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
