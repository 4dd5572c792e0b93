use actix_web::{error, web, HttpResponse, Responder};
use serde_json::Value;
use std::sync::Arc;

use crate::config::MapSettings;
use crate::core::panels::location::map_script_url;
use crate::models::{ErrorResponse, HealthResponse, MapConfigResponse};
use crate::services::RecommenderClient;

/// Fixed message returned for every proxy failure
pub const PROXY_ERROR_MESSAGE: &str = "Failed to fetch recommendations";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<RecommenderClient>,
    pub map: MapSettings,
}

/// Configure the recommendation proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend))
        .route("/map/config", web::get().to(map_config));
}

fn proxy_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: PROXY_ERROR_MESSAGE.to_string(),
    })
}

/// Unparseable request bodies get the same fixed error as upstream failures
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::error!("Error in recommend API: invalid JSON on {}: {}", req.path(), err);
    error::InternalError::from_response(err, proxy_error()).into()
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendation proxy
///
/// POST /api/recommend
///
/// The body is forwarded to the recommender unmodified and any JSON answer is relayed with
/// 200, whatever status the recommender used. Any failure yields:
/// ```json
/// { "error": "Failed to fetch recommendations" }
/// ```
async fn recommend(state: web::Data<AppState>, body: web::Json<Value>) -> impl Responder {
    match state.recommender.forward(&body).await {
        Ok(reply) => {
            tracing::info!("Relaying recommender response (upstream {})", reply.status);
            HttpResponse::Ok().json(reply.body)
        }
        Err(e) => {
            tracing::error!("Error in recommend API: {}", e);
            proxy_error()
        }
    }
}

/// Map widget bootstrap
///
/// GET /api/map/config
async fn map_config(state: web::Data<AppState>) -> impl Responder {
    let script_url = if state.map.client_id.is_empty() {
        None
    } else {
        Some(map_script_url(&state.map.script_base, &state.map.client_id))
    };

    HttpResponse::Ok().json(MapConfigResponse { script_url })
}
