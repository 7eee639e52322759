//! Immutable API configuration value
//!
//! Owned by the top-level service and passed down to collaborators; never
//! process-wide mutable state.

use std::time::Duration;

/// Connection settings for the tracker API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash (e.g. `https://tracker.example.com`).
    pub base_url: String,
    /// Shared secret sent as the `X-API-Key` header on every request.
    pub api_key: String,
    /// Per-request timeout enforced at the transport boundary.
    pub timeout: Duration,
}

impl ApiConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a configuration, normalizing the base URL so endpoint paths
    /// can be appended directly.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, api_key: api_key.into(), timeout: Self::DEFAULT_TIMEOUT }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for an API path (the path must start with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_from_base_url() {
        let config = ApiConfig::new("https://tracker.example.com/", "secret");
        assert_eq!(config.base_url, "https://tracker.example.com");
        assert_eq!(config.endpoint("/api/v1/tickets"), "https://tracker.example.com/api/v1/tickets");
    }

    #[test]
    fn default_timeout_applies() {
        let config = ApiConfig::new("http://localhost:8089", "secret");
        assert_eq!(config.timeout, ApiConfig::DEFAULT_TIMEOUT);
        let config = config.with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
