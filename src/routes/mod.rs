// Route exports
pub mod recommend;

use actix_web::web;

pub use recommend::{handle_json_payload_error, AppState, PROXY_ERROR_MESSAGE};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(recommend::configure),
    );
}
