use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "contactform.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// The one origin allowed to call the API from a browser
    /// (default: "http://localhost:3000")
    pub cors_origin: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "contactform.db")
    /// - `CORS_ORIGIN` - Allowed cross-origin caller (default: "http://localhost:3000")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "contactform.db".to_string()),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
