//! Defines the HTTP routes for the circuit inventory.
//!
//! These routes map the circuit listing and detail paths to their handler
//! functions.

use axum::{routing::get, Router};

use super::handlers::{get_circuit, list_circuits};
use crate::AppState;

pub fn circuit_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_circuits))
        .route("/:id", get(get_circuit))
}
