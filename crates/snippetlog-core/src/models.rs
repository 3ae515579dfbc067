//! Snippet and user models as exchanged with the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::InvalidInputError;
use crate::types::{Language, SnippetId};

/// Number of code characters shown in list previews.
pub const PREVIEW_CHARS: usize = 200;

/// A stored snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(rename = "_id")]
    pub id: SnippetId,
    pub title: String,
    pub code: String,
    #[serde(default)]
    pub language: Language,
    pub created_at: DateTime<Utc>,
}

impl Snippet {
    /// The first `max_chars` characters of the code, with `...` appended
    /// when anything was cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.code.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }

    /// A draft carrying this snippet's editable fields.
    pub fn to_draft(&self) -> SnippetDraft {
        SnippetDraft {
            title: self.title.clone(),
            code: self.code.clone(),
            language: self.language,
        }
    }
}

/// The editable fields of a snippet, sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetDraft {
    pub title: String,
    pub code: String,
    pub language: Language,
}

impl SnippetDraft {
    pub fn new(title: impl Into<String>, code: impl Into<String>, language: Language) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            language,
        }
    }

    /// Checks the required fields locally.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::MissingField`] for a blank title or code.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(InvalidInputError::MissingField { field: "title" }.into());
        }
        if self.code.trim().is_empty() {
            return Err(InvalidInputError::MissingField { field: "code" }.into());
        }
        Ok(())
    }
}

/// The user profile returned by register, login and `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserProfile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            id: None,
            name: None,
        }
    }
}
