//! HTTP client for the upstream ML prediction service
//!
//! The handler depends on the [`Predictor`] trait rather than a
//! concrete client so tests can substitute a scripted double. The real
//! implementation issues exactly one POST per call, bounded by a
//! request timeout, with no retries.

use crate::features::FeatureVector;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default bound on one upstream call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Why an upstream call failed
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The call did not complete within the configured timeout
    #[error("upstream request timed out")]
    Timeout,

    /// Connection or transport failure before a response arrived
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("upstream returned status {status}")]
    Status {
        status: u16,
        /// Upstream response body, when it parsed as JSON
        details: Option<Value>,
    },

    /// The service answered 2xx but the body was not JSON
    #[error("upstream returned a non-JSON success body")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Best-effort diagnostic payload from the upstream response
    pub fn details(&self) -> Option<&Value> {
        match self {
            UpstreamError::Status { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}

/// Capability to obtain a prediction for a validated feature vector
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, features: &FeatureVector) -> Result<Value, UpstreamError>;
}

/// reqwest-backed [`Predictor`] for the remote ML service
pub struct HttpPredictor {
    client: Client,
    predict_url: String,
}

impl HttpPredictor {
    /// Create a predictor for the given base URL and request timeout
    ///
    /// The trailing slash is stripped from the base URL so the outbound
    /// path is always `{base}/predict`, never `{base}//predict`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Url::parse(base_url).context("Invalid ML service URL")?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let base = base_url.trim_end_matches('/');

        Ok(Self {
            client,
            predict_url: format!("{}/predict", base),
        })
    }

    /// Create a predictor with the default 5-second timeout
    pub fn with_defaults(base_url: &str) -> Result<Self> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// The full outbound prediction URL
    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, features: &FeatureVector) -> Result<Value, UpstreamError> {
        debug!(url = %self.predict_url, features = features.len(), "Forwarding prediction request");

        let response = self
            .client
            .post(&self.predict_url)
            .json(features)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    UpstreamError::Timeout
                } else {
                    UpstreamError::Transport(err)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "ML service returned an error");
            let details = response.json::<Value>().await.ok();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                details,
            });
        }

        response.json().await.map_err(UpstreamError::Decode)
    }
}
