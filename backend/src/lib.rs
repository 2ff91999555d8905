//! Core library for the CircuitDesk backend.
//!
//! This crate implements the API service behind the ISP asset-inventory
//! console: companies, their physical locations, the circuits serving those
//! locations, and the user profiles of console operators. It wires the Axum
//! router, shared application state, and all domain modules together.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;

use std::sync::Arc;

use axum::{
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::config::Config;

/// Shared state handed to every handler: the connection pool and the
/// runtime configuration.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

/// Builds the full application router: public banner and health endpoints,
/// the authentication routes, and the token-guarded inventory API.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api/auth", auth::routes::auth_router(state.clone()))
        .nest("/api", api::router(state.clone()))
        .with_state(state);

    middleware::apply(router)
}

async fn root_handler() -> &'static str {
    "Welcome to CircuitDesk!"
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "circuitdesk-backend",
        "timestamp": chrono::Utc::now(),
    }))
}
