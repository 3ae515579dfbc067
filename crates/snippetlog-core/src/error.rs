//! Error types for the snippetlog client stack.
//!
//! One error type covers every failure a caller can observe, split into
//! transport, authentication, protocol and input validation variants so
//! views can decide what to show.

use std::fmt;
use thiserror::Error;

/// The unified error type for snippetlog operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors raised on the client side.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-success HTTP responses from the API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (bad URL, id, missing form field).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if this error is an HTTP 401 from the API.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Protocol(e) if e.is_unauthorized())
    }

    /// Returns the message a view should display for this error.
    ///
    /// Server-provided messages and local validation messages are shown
    /// as-is. Everything else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Protocol(e) => e.user_message(fallback),
            Error::InvalidInput(e @ InvalidInputError::MissingField { .. }) => e.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors detected locally.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session is stored.
    #[error("not logged in")]
    NotLoggedIn,

    /// A refresh was requested but no refresh token is stored.
    #[error("no refresh token available")]
    RefreshTokenMissing,
}

/// An error response from the API.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Check if the server rejected the request's authorization.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// The server-provided message, or `fallback` when the server sent none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid snippet identifier.
    #[error("invalid snippet id '{value}': {reason}")]
    SnippetId { value: String, reason: String },

    /// Unknown language label.
    #[error("unknown language '{value}'")]
    Language { value: String },

    /// A required form field is blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The server answered 2xx with a body that does not match the contract.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
