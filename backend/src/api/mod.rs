//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the inventory domains
//! (companies, locations, circuits), the dashboard aggregate, and operator
//! profiles, excluding core authentication routes which are handled
//! separately.

pub mod circuit;
pub mod company;
pub mod dashboard;
pub mod location;
pub mod profile;

use axum::{middleware::from_fn_with_state, Router};

use crate::auth::middleware::require_auth;
use crate::AppState;

/// Builds the `/api` router. Every route in here sits behind the bearer
/// token middleware.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/companies", company::routes::company_router())
        .nest("/locations", location::routes::location_router())
        .nest("/circuits", circuit::routes::circuit_router())
        .nest("/dashboard", dashboard::routes::dashboard_router())
        .nest("/profiles", profile::routes::profile_router())
        .route_layer(from_fn_with_state(state, require_auth))
}
