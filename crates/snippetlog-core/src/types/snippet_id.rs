//! Snippet identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Maximum accepted identifier length.
const MAX_ID_LEN: usize = 128;

/// A validated snippet identifier (the server's `_id`).
///
/// Identifiers are interpolated into request paths, so only characters that
/// are safe in a single path segment are accepted.
///
/// # Example
///
/// ```
/// use snippetlog_core::SnippetId;
///
/// let id = SnippetId::new("65f1c2a9e4b0a1b2c3d4e5f6").unwrap();
/// assert_eq!(id.as_str(), "65f1c2a9e4b0a1b2c3d4e5f6");
/// assert!(SnippetId::new("../auth").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnippetId(String);

impl SnippetId {
    /// Create a new snippet id, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, too long or contains
    /// characters other than ASCII alphanumerics, `-` and `_`.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::SnippetId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.len() > MAX_ID_LEN {
            return Err(InvalidInputError::SnippetId {
                value: s.to_string(),
                reason: format!("exceeds maximum length of {} characters", MAX_ID_LEN),
            }
            .into());
        }

        if let Some(c) = s
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        {
            return Err(InvalidInputError::SnippetId {
                value: s.to_string(),
                reason: format!("contains invalid character '{}'", c),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnippetId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SnippetId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SnippetId> for String {
    fn from(id: SnippetId) -> Self {
        id.0
    }
}

impl AsRef<str> for SnippetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
