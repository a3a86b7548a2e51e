//! ReguGuard API - HTTP front end for compliance checks
//!
//! Provides REST endpoints for:
//! - Health checks
//! - Sample documents
//! - SOP-versus-regulation comparison

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.body_limit();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/samples", get(handlers::get_samples))
        .route("/api/compare", post(handlers::compare))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
