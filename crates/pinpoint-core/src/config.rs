//! Client configuration.
//!
//! Resolution order, later wins:
//!
//! 1. Built-in defaults
//! 2. The config file: an explicit path, else
//!    `$XDG_CONFIG_HOME/pinpoint/config.json` when it exists
//! 3. Environment variables (`PINPOINT_API_URL`, `PINPOINT_GEOCODER_URL`,
//!    `PINPOINT_TIMEOUT_SECS`)
//! 4. Explicit builder settings (CLI flags)

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::error::{PinpointError, Result};

/// Default base URL of the remote point/map API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default geocoding service.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_URL: &str = "PINPOINT_API_URL";
pub const ENV_GEOCODER_URL: &str = "PINPOINT_GEOCODER_URL";
pub const ENV_TIMEOUT_SECS: &str = "PINPOINT_TIMEOUT_SECS";

/// Settings for the HTTP clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the remote point/map API
    pub api_url: String,
    /// Base URL of the geocoding service
    pub geocoder_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request (the public geocoder requires one)
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("pinpoint/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Load the config file (if any) and apply environment overrides.
    ///
    /// # Errors
    ///
    /// * `PinpointError::FileSystem` - an explicit `path` cannot be read
    /// * `PinpointError::Serialization` - the file is not valid JSON
    /// * `PinpointError::Configuration` - an environment value is malformed
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| PinpointError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// The per-user config file, if one exists.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("pinpoint").find_config_file("config.json")
    }

    /// Apply overrides from a key lookup (the process environment in
    /// [`ClientConfig::load`]).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(url) = lookup(ENV_GEOCODER_URL) {
            self.geocoder_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = secs.trim().parse().map_err(|e| PinpointError::Configuration {
                message: format!("{ENV_TIMEOUT_SECS}='{secs}' is not a number of seconds: {e}"),
            })?;
        }
        Ok(self)
    }

    /// Reject settings the HTTP clients cannot work with.
    ///
    /// # Errors
    ///
    /// * `PinpointError::Configuration` - the timeout is under one second
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(PinpointError::Configuration {
                message: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
