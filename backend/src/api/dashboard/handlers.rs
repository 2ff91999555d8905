//! Handler functions for the dashboard API.
//!
//! These functions serve the aggregated circuit figures computed by
//! `services::data_aggregator`.

use axum::{extract::State, response::Json};

use crate::errors::ApiError;
use crate::services::data_aggregator::{self, CircuitStats};
use crate::AppState;

/// `GET /api/dashboard/stats`. Recomputed from the circuit table on every
/// request.
pub async fn circuit_stats(
    State(state): State<AppState>,
) -> Result<Json<CircuitStats>, ApiError> {
    let stats = data_aggregator::circuit_stats(&state.db).await?;
    Ok(Json(stats))
}
