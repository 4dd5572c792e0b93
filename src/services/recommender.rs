use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when forwarding to the recommender
#[derive(Debug, Error)]
pub enum RecommenderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Upstream reply relayed back to the caller as-is
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
}

/// Client for the external recommendation engine
///
/// Bodies are forwarded without inspection; the engine's response shape is opaque here.
pub struct RecommenderClient {
    endpoint: String,
    client: Client,
}

impl RecommenderClient {
    pub fn new(endpoint: String) -> Result<Self, RecommenderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `body` to the recommender and return its status and JSON body
    pub async fn forward(&self, body: &Value) -> Result<UpstreamReply, RecommenderError> {
        tracing::debug!("Forwarding recommendation request to {}", self.endpoint);

        let response = self.client.post(&self.endpoint).json(body).send().await?;
        let status = response.status();

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            RecommenderError::InvalidResponse(format!("Recommender returned non-JSON body ({}): {}", status, e))
        })?;

        if !status.is_success() {
            tracing::warn!("Recommender answered {}", status);
        }

        Ok(UpstreamReply { status, body })
    }
}
