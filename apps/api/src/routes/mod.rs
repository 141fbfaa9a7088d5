pub mod health;

use anyhow::{Context, Result};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/", get(handlers::root))
        .route("/api/questions", get(handlers::list_questions))
        .route("/api/submit-assessment", post(handlers::submit_assessment))
        .route("/api/results/:result_id", get(handlers::get_result))
        .with_state(state)
}

/// Builds the CORS layer from the configured allow-list.
///
/// `None` allows any origin; an explicit list restricts to exactly those
/// origins and permits credentials.
pub fn cors_layer(origins: Option<&[String]>) -> Result<CorsLayer> {
    let layer = match origins {
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|o| {
                    o.parse::<HeaderValue>()
                        .with_context(|| format!("Invalid CORS origin '{o}'"))
                })
                .collect::<Result<Vec<_>>>()?;
            // Credentials cannot be combined with wildcards, so the
            // restricted branch enumerates methods and headers.
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true)
        }
    };
    Ok(layer)
}
