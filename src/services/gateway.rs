use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::models::{RecommendationRequest, RecommendationResponse};

/// Why a profile submission did not produce recommendations
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("Profile can only be submitted from the profile screen")]
    NotOnProfile,

    #[error(transparent)]
    Incomplete(#[from] crate::core::builder::IncompleteForm),

    #[error("Request failed validation: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Recommendation service answered {0}")]
    Status(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Submission cancelled")]
    Cancelled,
}

/// Where the profile builder sends finished profiles
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResponse, SubmitError>;
}

/// Gateway that talks to the proxy's `POST /api/recommend`
pub struct HttpRecommendationGateway {
    url: String,
    client: Client,
}

impl HttpRecommendationGateway {
    pub fn new(base_url: &str) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            url: format!("{}/api/recommend", base_url.trim_end_matches('/')),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecommendationGateway for HttpRecommendationGateway {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResponse, SubmitError> {
        let response = self.client.post(&self.url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(SubmitError::Status(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SubmitError::InvalidResponse(format!("Failed to parse recommendations: {}", e)))
    }
}
