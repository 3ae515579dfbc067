//! Client configuration.

use std::time::Duration;

use snippetlog_core::ApiUrl;

/// Per-request timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings shared by every request the client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto.
    pub base_url: ApiUrl,
    /// Per-request timeout; an expired request fails like any network error.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ApiUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("snippetlog/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("snippetlog/"));
    }

    #[test]
    fn overrides() {
        let base = ApiUrl::new("https://snippets.example.com/api").unwrap();
        let config = ClientConfig::new(base.clone())
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent");
        assert_eq!(config.base_url, base);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent");
    }
}
