//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user login, registration, and token refreshing. They
//! are designed to be nested under the main Axum router.

use axum::{middleware::from_fn_with_state, routing::post, Router};

use crate::auth::handlers;
use crate::auth::middleware::require_auth;
use crate::AppState;

/// Builds the `/api/auth` router. Registration and login are open; refresh
/// requires a still-valid token.
pub fn auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route(
            "/refresh",
            post(handlers::refresh).route_layer(from_fn_with_state(state, require_auth)),
        )
}
