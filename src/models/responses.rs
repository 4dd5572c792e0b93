use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Body returned by the recommender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<MatchResult>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map widget bootstrap data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfigResponse {
    #[serde(rename = "scriptUrl")]
    pub script_url: Option<String>,
}
