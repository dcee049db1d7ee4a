//! Client configuration
//!
//! One `ClientConfig` per service/version/credential combination.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "apps.lulu.com";

/// Environment variable names read by [`ClientConfig::from_env`]
pub mod env {
    pub const HOST: &str = "WRSERVICES_HOST";
    pub const API_KEY: &str = "WRSERVICES_API_KEY";
    pub const SECRET: &str = "WRSERVICES_SECRET";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub service: String,
    pub version: String,
    /// May be empty; a blank key is not sent in the URL
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub secret: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl ClientConfig {
    pub fn new(
        service: impl Into<String>,
        version: impl Into<String>,
        api_key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            host: default_host(),
            service: service.into(),
            version: version.into(),
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Build from `WRSERVICES_*` environment variables
    ///
    /// Unset variables fall back to the default host and empty credentials.
    pub fn from_env(service: impl Into<String>, version: impl Into<String>) -> Self {
        let var = |name: &str| std::env::var(name).ok();

        Self {
            host: var(env::HOST).unwrap_or_else(default_host),
            service: service.into(),
            version: version.into(),
            api_key: var(env::API_KEY).unwrap_or_default(),
            secret: var(env::SECRET).unwrap_or_default(),
        }
    }

    /// Whether the key is embedded in request URLs (blank keys are not)
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
