//! Programming language label attached to every snippet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The language a snippet is tagged with.
///
/// Labels the server does not know about decode as [`Language::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Python,
    Java,
    Cpp,
    Html,
    Css,
    Sql,
    Bash,
    #[serde(other)]
    Other,
}

impl Language {
    /// Every selectable language, in editor order.
    pub const ALL: [Language; 9] = [
        Language::Javascript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Html,
        Language::Css,
        Language::Sql,
        Language::Bash,
        Language::Other,
    ];

    /// The wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Bash => "bash",
            Language::Other => "other",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Sql => "SQL",
            Language::Bash => "Bash",
            Language::Other => "Other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| {
                lang.as_str().eq_ignore_ascii_case(needle)
                    || lang.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                InvalidInputError::Language {
                    value: s.to_string(),
                }
                .into()
            })
    }
}
