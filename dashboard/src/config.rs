//! # Client Configuration
//!
//! Environment-driven configuration for the dashboard client. Every value has
//! a default suitable for a locally running backend.

use std::env;
use std::path::PathBuf;

/// Default backend base URL (locally running API server).
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default path of the persisted session file.
const DEFAULT_SESSION_FILE: &str = "./aether-session.json";

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub api_url: String,
    /// Where the bearer token is persisted between runs.
    pub session_file: PathBuf,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, String> {
        let api_url = env::var("AETHER_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let session_file = env::var("AETHER_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        let timeout_secs = env::var("AETHER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| "AETHER_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            api_url,
            session_file,
            timeout_secs,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err("AETHER_API_URL must start with http:// or https://".to_string());
        }

        if self.timeout_secs < 1 || self.timeout_secs > 120 {
            return Err("AETHER_TIMEOUT_SECS must be between 1 and 120".to_string());
        }

        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            timeout_secs: 10,
        }
    }
}
