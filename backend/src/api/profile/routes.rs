//! Defines the HTTP routes for operator profiles.
//!
//! These routes map the self-service profile paths and the admin-only
//! listing and role paths to their handler functions.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{get_my_profile, list_profiles, update_my_profile, update_role};
use crate::AppState;

pub fn profile_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles))
        .route("/me", get(get_my_profile).put(update_my_profile))
        .route("/:user_id/role", put(update_role))
}
