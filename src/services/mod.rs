// HTTP service wiring: routes, CORS, shared settings state.
pub mod analyze;

use crate::config::settings::ServiceSettings;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router. CORS is fully open on purpose: the API is
/// credential-agnostic and meant to be called straight from browsers on any
/// origin.
pub fn app(settings: ServiceSettings) -> Router {
    Router::new()
        .route("/analyze", post(analyze::analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(settings))
}
