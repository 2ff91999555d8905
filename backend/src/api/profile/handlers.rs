//! Handler functions for the operator profile API.
//!
//! These functions serve the caller's own profile, which is created with the
//! `viewer` role on first access, and the admin-only listing and role
//! management endpoints.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
};
use serde::Deserialize;

use crate::auth::models::AuthUser;
use crate::database::models::{ProfileUpdate, ProfileWithAccount, Role, UserProfile};
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct RoleUpdate {
    pub role: Role,
}

/// Loads the caller's profile and checks it carries the admin role.
async fn require_admin(state: &AppState, user: &AuthUser) -> Result<UserProfile, ApiError> {
    let profile = queries::get_profile_for_user(&state.db, &user.id).await?;
    if profile.role != Role::Admin {
        return Err(ApiError::Forbidden("admin role required"));
    }
    Ok(profile)
}

/// `GET /api/profiles/me`. First access creates a default `viewer` profile.
pub async fn get_my_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = queries::get_profile_for_user(&state.db, &user.id).await?;
    Ok(Json(profile))
}

/// `PUT /api/profiles/me`. Partial update of the caller's contact fields;
/// absent fields keep their stored values.
pub async fn update_my_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>, ApiError> {
    // Materializes the row for first-time callers.
    queries::get_profile_for_user(&state.db, &user.id).await?;

    let profile = queries::update_profile(&state.db, &user.id, &payload)
        .await?
        .ok_or(ApiError::NotFound("profile"))?;
    Ok(Json(profile))
}

/// `GET /api/profiles`. Admin-only listing of every profile with its
/// account email, newest first.
pub async fn list_profiles(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ProfileWithAccount>>, ApiError> {
    require_admin(&state, &user).await?;

    let profiles = queries::list_profiles(&state.db).await?;
    Ok(Json(profiles))
}

/// `PUT /api/profiles/:user_id/role`. Admin-only role change.
pub async fn update_role(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
    Json(payload): Json<RoleUpdate>,
) -> Result<Json<UserProfile>, ApiError> {
    require_admin(&state, &user).await?;

    let profile = queries::update_role(&state.db, &user_id, payload.role)
        .await?
        .ok_or(ApiError::NotFound("profile"))?;
    tracing::info!(target_user = %user_id, role = ?payload.role, "role updated");
    Ok(Json(profile))
}
