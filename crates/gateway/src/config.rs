//! Gateway configuration

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

/// Gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Port the gateway listens on
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Base URL of the ML prediction service
    #[serde(default = "default_ml_url")]
    pub ml_url: String,

    /// Timeout for one upstream call, in seconds
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout_secs: u64,
}

fn default_listen_port() -> u16 {
    8080
}

fn default_ml_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_upstream_timeout() -> u64 {
    5
}

impl GatewayConfig {
    /// Load configuration from the environment (GATEWAY_ prefix)
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("GATEWAY"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| GatewayConfig {
            listen_port: default_listen_port(),
            ml_url: default_ml_url(),
            upstream_timeout_secs: default_upstream_timeout(),
        }))
    }

    /// Upstream timeout as a [`Duration`]
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
