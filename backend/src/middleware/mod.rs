//! General-purpose middleware for the API.
//!
//! This module contains the reusable middleware layers (request tracing and
//! CORS) applied to the whole Axum router.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Wraps the router with request tracing and a permissive CORS policy.
/// The console runs on a different origin during development.
pub fn apply(router: Router) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
