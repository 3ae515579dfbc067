//! Session lifecycle events published by the transport.

use std::fmt;

use snippetlog_core::Error;
use snippetlog_core::error::AuthError;

/// Capacity of the session event channel.
pub(crate) const EVENT_CAPACITY: usize = 16;

/// Something that happened to the stored session outside a caller's
/// direct control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new access token was obtained and stored.
    Refreshed,
    /// The stored credentials were cleared; the user must log in again.
    Invalidated { reason: InvalidationReason },
}

/// Why the transport tore the session down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationReason {
    /// A request was rejected and no refresh token was stored.
    MissingRefreshToken,
    /// The refresh endpoint answered with a non-success status.
    RefreshRejected { status: u16 },
    /// The refresh call failed before a usable answer arrived.
    RefreshFailed { message: String },
}

impl From<&Error> for InvalidationReason {
    fn from(err: &Error) -> Self {
        match err {
            Error::Auth(AuthError::RefreshTokenMissing) => InvalidationReason::MissingRefreshToken,
            Error::Protocol(e) => InvalidationReason::RefreshRejected { status: e.status },
            other => InvalidationReason::RefreshFailed {
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Display for InvalidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidationReason::MissingRefreshToken => write!(f, "no refresh token stored"),
            InvalidationReason::RefreshRejected { status } => {
                write!(f, "refresh rejected with HTTP {}", status)
            }
            InvalidationReason::RefreshFailed { message } => write!(f, "refresh failed: {}", message),
        }
    }
}
