//! Client configuration assembled from command-line arguments

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_FALLBACK_WORD: &str = "REACT";
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Settings for the word service client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the word service (no trailing slash needed)
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Target used when the service cannot supply one
    pub fallback_word: String,
    /// Skip the network entirely
    pub offline: bool,
}

impl ClientConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            fallback_word: DEFAULT_FALLBACK_WORD.to_string(),
            offline: false,
        }
    }
}

/// Logging destination and verbosity
#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub debug: bool,
}
