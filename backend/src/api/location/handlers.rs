//! Handler functions for the location inventory API.
//!
//! These functions process requests for location records. List responses
//! embed the owning company's name so the console never needs a second
//! lookup to label a row.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::database::models::{Location, LocationFilter, LocationWithCompany, NewLocation};
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

/// `GET /api/locations`. Supports search, state, city, criticality, and
/// company filters; blank values are treated as absent.
pub async fn list_locations(
    State(state): State<AppState>,
    Query(filter): Query<LocationFilter>,
) -> Result<Json<Vec<LocationWithCompany>>, ApiError> {
    let locations = queries::list_locations(&state.db, &filter).await?;
    Ok(Json(locations))
}

/// `GET /api/locations/:id`.
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LocationWithCompany>, ApiError> {
    let location = queries::get_location(&state.db, &id)
        .await?
        .ok_or(ApiError::NotFound("location"))?;
    Ok(Json(location))
}

/// `POST /api/locations`. Rejects payloads with blank required fields
/// before any write happens.
pub async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<NewLocation>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    queries::get_company(&state.db, &payload.company_id)
        .await?
        .ok_or(ApiError::NotFound("company"))?;

    let location = queries::insert_location(&state.db, &payload).await?;
    tracing::info!(location_id = %location.id, "location created");
    Ok((StatusCode::CREATED, Json(location)))
}

/// `PUT /api/locations/:id`. Full-field update with the same validation as
/// creation.
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewLocation>,
) -> Result<Json<Location>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    queries::get_company(&state.db, &payload.company_id)
        .await?
        .ok_or(ApiError::NotFound("company"))?;

    let location = queries::update_location(&state.db, &id, &payload)
        .await?
        .ok_or(ApiError::NotFound("location"))?;
    Ok(Json(location))
}
