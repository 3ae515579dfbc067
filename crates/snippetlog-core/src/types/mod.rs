//! Validated value types.
//!
//! These types enforce their invariants at construction time, so a value
//! that reaches the transport is always safe to put on the wire.

mod api_url;
mod language;
mod snippet_id;

pub use api_url::ApiUrl;
pub use language::Language;
pub use snippet_id::SnippetId;
