//! Client configuration

use std::time::Duration;

/// Default API location, the port the restaurant backend listens on
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client configuration for connecting to the restaurant API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            user_agent: format!("pos-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Build from the environment, after loading `.env` if one exists
    ///
    /// - `POS_API_URL` (default `http://localhost:5000`)
    /// - `POS_API_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "Failed to load .env file");
        }

        let mut config =
            Self::new(std::env::var("POS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()));
        if let Some(timeout) = std::env::var("POS_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
