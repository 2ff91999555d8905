//! Handler functions for the circuit inventory API.
//!
//! These functions process requests for circuit records. Responses embed
//! the location and company names resolved through the two-level join.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::database::models::{CircuitFilter, CircuitWithLocation};
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

/// `GET /api/circuits`. Supports status and location filters; blank values
/// are treated as absent.
pub async fn list_circuits(
    State(state): State<AppState>,
    Query(filter): Query<CircuitFilter>,
) -> Result<Json<Vec<CircuitWithLocation>>, ApiError> {
    let circuits = queries::list_circuits(&state.db, &filter).await?;
    Ok(Json(circuits))
}

/// `GET /api/circuits/:id`.
pub async fn get_circuit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CircuitWithLocation>, ApiError> {
    let circuit = queries::get_circuit(&state.db, &id)
        .await?
        .ok_or(ApiError::NotFound("circuit"))?;
    Ok(Json(circuit))
}
