//! Configuration handling for the application.
//!
//! Everything comes from environment variables with development defaults,
//! so the binary runs out of the box against a local database file. The
//! `Config::from_env` method performs the loading and is the single place
//! validation would hook into later.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests and build
/// scripts refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_DB_PATH: &str = "DB_PATH";
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_DB_PATH: &str = "database.db";
const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    db_path: String,
    api_base_url: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        db_path: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            db_path: db_path.into(),
            api_base_url: api_base_url.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// This never fails today because we only do simple string extraction;
    /// address parsing or path checks would turn it into a `ConfigError`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let db_path = env::var(ENV_DB_PATH).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        let api_base_url =
            env::var(ENV_API_BASE_URL).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Ok(Self {
            bind_addr,
            db_path,
            api_base_url,
        })
    }

    /// TCP bind address (host:port) for the HTTP read proxy.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Path to the SQLite database file holding the read view.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }
    /// Base URL the data-source client fetches records from.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self::new(DEFAULT_BIND_ADDR, DEFAULT_DB_PATH, DEFAULT_API_BASE_URL)
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [ENV_BIND_ADDR, ENV_DB_PATH, ENV_API_BASE_URL] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), super::DEFAULT_BIND_ADDR);
        assert_eq!(cfg.db_path(), super::DEFAULT_DB_PATH);
        assert_eq!(cfg.api_base_url(), super::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "127.0.0.1:9000");
            env::set_var(ENV_DB_PATH, "/var/data/scrape.db");
            env::set_var(ENV_API_BASE_URL, "https://data.example.it");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.db_path(), "/var/data/scrape.db");
        assert_eq!(cfg.api_base_url(), "https://data.example.it");
        clear_env();
    }
}
