//! Middleware for protecting authenticated routes and handling authorization.
//!
//! This module contains logic for validating bearer tokens on incoming
//! requests and exposing the caller's identity to downstream handlers via
//! request extensions.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::models::AuthUser;
use crate::auth::service;
use crate::errors::ApiError;
use crate::AppState;

/// Rejects requests lacking a valid `Authorization: Bearer` token and
/// attaches an [`AuthUser`] extension for the ones that carry it.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::MissingAuth)?;

    let token = header.strip_prefix("Bearer ").ok_or(ApiError::MissingAuth)?;

    let claims = service::decode_token(&state.config, token)
        .map_err(|err| ApiError::Unauthorized(err.to_string()))?;

    request.extensions_mut().insert(AuthUser { id: claims.sub });

    Ok(next.run(request).await)
}
