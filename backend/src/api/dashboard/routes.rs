//! Defines the HTTP routes for the dashboard.
//!
//! These routes map the summary-statistics path to its handler function.

use axum::{routing::get, Router};

use super::handlers::circuit_stats;
use crate::AppState;

pub fn dashboard_router() -> Router<AppState> {
    Router::new().route("/stats", get(circuit_stats))
}
