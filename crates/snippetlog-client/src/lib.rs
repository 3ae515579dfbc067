//! snippetlog-client - Authenticated REST client for the snippet API.
//!
//! All API traffic flows through an [`AuthedTransport`], which attaches the
//! stored bearer token, transparently refreshes an expired access token once
//! per request, and tears the session down when the refresh fails. The
//! [`SessionState`] tracks who is logged in and the [`guard`] function
//! decides whether a protected view may render.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use snippetlog_client::{ClientConfig, SnippetClient};
//! use snippetlog_core::{Credentials, MemoryCredentialStore};
//!
//! # async fn example() -> Result<(), snippetlog_core::Error> {
//! let store = Arc::new(MemoryCredentialStore::new());
//! let client = SnippetClient::new(ClientConfig::default(), store)?;
//!
//! client.auth().login(&Credentials::new("a@b.com", "hunter2")).await?;
//!
//! for snippet in client.snippets().list().await? {
//!     println!("{} ({})", snippet.title, snippet.language);
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod config;
mod endpoints;
mod events;
mod guard;
mod session;
mod snippets;
mod transport;

pub use auth::AuthService;
pub use client::SnippetClient;
pub use config::ClientConfig;
pub use events::{InvalidationReason, SessionEvent};
pub use guard::{Guarded, Redirect, Route, guard};
pub use session::{CurrentUser, SessionState};
pub use snippets::SnippetService;
pub use transport::{AuthedTransport, PendingRequest};
