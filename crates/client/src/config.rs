//! Client configuration loaded from environment variables.

use std::time::Duration;

/// Connection settings for the remote backend.
///
/// Defaults are suitable for local development; override via
/// environment variables in production.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API, without a trailing slash
    /// (default: `http://localhost:5000/api`).
    pub base_url: String,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `OBELISK_API_URL`      | `http://localhost:5000/api` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let base_url = std::env::var("OBELISK_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".into());
        let base_url = base_url.trim_end_matches('/').to_string();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
        }
    }

    /// Build a pooled [`reqwest::Client`] honoring the timeout.
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".into(),
            request_timeout_secs: 30,
        }
    }
}
