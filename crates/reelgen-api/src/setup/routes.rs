//! Route and middleware assembly

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_rapidoc::RapiDoc;

// Headroom for multipart boundaries and form fields on top of the asset cap
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Build the application router
pub fn setup_routes(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_size_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/api/generate", post(handlers::generate::generate_video))
        .route("/health", get(handlers::health::health))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", <ApiDoc as utoipa::OpenApi>::openapi()).path("/docs"))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
