//! Builder for creating and configuring Pinpoint instances.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;

use super::Pinpoint;
use crate::{
    config::ClientConfig,
    error::{PinpointError, Result},
    geocode::GeocodeClient,
    remote::HttpApi,
};

/// Builder for creating and configuring Pinpoint instances.
#[derive(Debug, Clone, Default)]
pub struct PinpointBuilder {
    config_path: Option<PathBuf>,
    api_url: Option<String>,
    geocoder_url: Option<String>,
    timeout: Option<Duration>,
}

impl PinpointBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom config file path.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/pinpoint/config.json` when it
    /// exists and the built-in defaults otherwise.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the remote API base URL.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.api_url = url;
        }
        self
    }

    /// Overrides the geocoding service base URL.
    pub fn with_geocoder_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.geocoder_url = url;
        }
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves the configuration and builds the HTTP clients.
    ///
    /// No request is made; an unreachable API only surfaces on first use.
    ///
    /// # Errors
    ///
    /// Returns `PinpointError::FileSystem` or `PinpointError::Serialization`
    /// for an unreadable config file and `PinpointError::Configuration` for
    /// a timeout under one second or if the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<Pinpoint> {
        let mut config = ClientConfig::load(self.config_path.as_deref())?;
        if let Some(url) = self.api_url {
            config.api_url = url;
        }
        if let Some(url) = self.geocoder_url {
            config.geocoder_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout.as_secs();
        }
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PinpointError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Pinpoint {
            api: HttpApi::new(client.clone(), config.api_url.clone()),
            geocoder: GeocodeClient::new(client, config.geocoder_url.clone()),
            config,
        })
    }
}
