//! HTTP API - route assembly and middleware layers
//!
//! Versioned under `/api/v1`. One handler module per dashboard panel so the
//! frontend can toggle panels independently; only the score route touches
//! the network.

pub mod handlers;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        // Client selector + sidebar profile
        .route("/api/v1/clients", get(handlers::clients::list))
        .route("/api/v1/clients/:id/profile", get(handlers::clients::profile))
        // Remote scoring + verdict + gauge
        .route("/api/v1/clients/:id/score", get(handlers::scoring::score))
        // Attribution charts
        .route(
            "/api/v1/clients/:id/attribution",
            get(handlers::explain::local),
        )
        .route("/api/v1/attribution/global", get(handlers::explain::global))
        // Feature distribution explorer
        .route("/api/v1/features", get(handlers::distribution::features))
        .route(
            "/api/v1/clients/:id/distribution/:feature",
            get(handlers::distribution::distribution),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
