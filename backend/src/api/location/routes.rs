//! Defines the HTTP routes for the location inventory.
//!
//! These routes map the location listing, detail, creation, and edit paths
//! to their handler functions.

use axum::{routing::get, Router};

use super::handlers::{create_location, get_location, list_locations, update_location};
use crate::AppState;

pub fn location_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route("/:id", get(get_location).put(update_location))
}
