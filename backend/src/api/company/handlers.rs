//! Handler functions for the company inventory API.
//!
//! These functions process requests for company records, applying the
//! list filters and creation validation before touching the query layer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::database::models::{Company, CompanyFilter, NewCompany};
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

/// `GET /api/companies`. Filters arrive as query parameters; blank values
/// are treated as absent.
pub async fn list_companies(
    State(state): State<AppState>,
    Query(filter): Query<CompanyFilter>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = queries::list_companies(&state.db, &filter).await?;
    Ok(Json(companies))
}

/// `GET /api/companies/:id`.
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Company>, ApiError> {
    let company = queries::get_company(&state.db, &id)
        .await?
        .ok_or(ApiError::NotFound("company"))?;
    Ok(Json(company))
}

/// `POST /api/companies`. Rejects payloads with blank required fields
/// before any write happens.
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<NewCompany>,
) -> Result<(StatusCode, Json<Company>), ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let company = queries::insert_company(&state.db, &payload).await?;
    tracing::info!(company_id = %company.id, "company created");
    Ok((StatusCode::CREATED, Json(company)))
}
