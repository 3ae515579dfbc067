//! REST endpoint paths and request/response bodies.

use serde::{Deserialize, Serialize};

use snippetlog_core::{AuthTokens, Snippet, SnippetId, UserProfile};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST {email, password, name?} -> {user, tokens}
pub const REGISTER: &str = "auth/register";

/// POST {email, password} -> {user, tokens}
pub const LOGIN: &str = "auth/login";

/// POST {refreshToken} -> {accessToken}
pub const REFRESH: &str = "auth/refresh";

/// POST {refreshToken} -> {}
pub const LOGOUT: &str = "auth/logout";

/// GET -> {user}
pub const ME: &str = "auth/me";

/// GET -> {snippets}, POST {title, code, language} -> Snippet
pub const SNIPPETS: &str = "snippets";

/// Path of a single snippet.
pub fn snippet(id: &SnippetId) -> String {
    format!("{}/{}", SNIPPETS, id.as_str())
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for register.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// Response from login and register.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub tokens: AuthTokens,
}

/// Request body for refresh and logout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest<'a> {
    pub refresh_token: &'a str,
}

impl std::fmt::Debug for RefreshTokenRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenRequest")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

/// Response from refresh.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Response from `/auth/me`.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// Response from listing snippets.
#[derive(Debug, Deserialize)]
pub struct SnippetListResponse {
    pub snippets: Vec<Snippet>,
}

/// Response from fetching one snippet.
#[derive(Debug, Deserialize)]
pub struct SnippetResponse {
    pub snippet: Snippet,
}

/// Error body the API sends with non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
