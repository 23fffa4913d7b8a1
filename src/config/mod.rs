//! Configuration loading for the submission client

use crate::core::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Echo endpoint the form posts to unless configured otherwise
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/catcorner";

fn default_timeout_secs() -> u64 {
    30
}

/// Where and how orders are submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL receiving the POSTed order
    pub endpoint: String,

    /// Upper bound on one request/response exchange
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The endpoint must be an http or https URL and the timeout non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = reqwest::Url::parse(&self.endpoint)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
        if !valid {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                timeout_secs: self.timeout_secs,
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configuration pointing at the public echo service
    pub fn default_config() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
