//! Defines the HTTP routes for the company inventory.
//!
//! These routes map the company listing, detail, and creation paths to
//! their handler functions.

use axum::{routing::get, Router};

use super::handlers::{create_company, get_company, list_companies};
use crate::AppState;

pub fn company_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route("/:id", get(get_company))
}
