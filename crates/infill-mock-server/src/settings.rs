//! Process settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Bind address variable
pub const ADDR_VAR: &str = "INFILL_MOCK_ADDR";
/// Request log path variable
pub const LOG_FILE_VAR: &str = "INFILL_MOCK_LOG_FILE";
/// Fixture glob variable
pub const FIXTURES_VAR: &str = "INFILL_MOCK_FIXTURES";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8012";
pub const DEFAULT_LOG_FILE_NAME: &str = "mock_infill_server.log";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid {var} value '{value}': {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address to listen on
    pub addr: SocketAddr,
    /// File receiving one JSON line per served request
    pub log_file: PathBuf,
    /// Glob of fixture files replacing the built-in table
    pub fixtures: Option<String>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through a variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| SettingsError::InvalidAddr {
                var: ADDR_VAR,
                value: addr_value.clone(),
                source,
            })?;

        let log_file = match lookup(LOG_FILE_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(SettingsError::Empty { var: LOG_FILE_VAR })
            }
            Some(value) => PathBuf::from(value),
            None => default_log_file(),
        };

        let fixtures = match lookup(FIXTURES_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(SettingsError::Empty { var: FIXTURES_VAR })
            }
            other => other,
        };

        Ok(Self {
            addr,
            log_file,
            fixtures,
        })
    }
}

/// Log file next to the running executable.
pub fn default_log_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_LOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME))
}
