//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for user authentication
//! (login, registration, token refresh), parse request data, validate input,
//! and delegate to `auth::service` for the core business logic.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
};

use crate::auth::models::{AuthUser, LoginRequest, RegisterRequest, TokenResponse};
use crate::auth::service;
use crate::errors::ApiError;
use crate::AppState;

/// `POST /api/auth/register`. Creates an account and signs it in.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let account = service::create_account(&state.db, &payload.email, &payload.password).await?;
    tracing::info!(user_id = %account.id, "account registered");

    let token = service::issue_token(&state.config, &account.id)?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// `POST /api/auth/login`. Verifies credentials and issues a token.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let account = service::authenticate(&state.db, &payload.email, &payload.password).await?;
    tracing::debug!(user_id = %account.id, "login succeeded");

    let token = service::issue_token(&state.config, &account.id)?;
    Ok(Json(token))
}

/// `POST /api/auth/refresh`. Exchanges a still-valid token for a fresh one.
pub async fn refresh(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<TokenResponse>, ApiError> {
    // The middleware has already validated the presented token; re-check the
    // account still exists before extending its session.
    service::find_account(&state.db, &user.id)
        .await?
        .ok_or(ApiError::NotFound("account"))?;

    let token = service::issue_token(&state.config, &user.id)?;
    Ok(Json(token))
}
