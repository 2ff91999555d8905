//! Logic for collecting, processing, and aggregating inventory data.
//!
//! This module is responsible for reducing raw circuit rows into the summary
//! figures the dashboard displays, keeping the arithmetic in one place so the
//! query layer stays a thin projection.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::models::{CircuitCostRow, CircuitStatus};
use crate::database::queries;

/// Fleet-wide circuit summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitStats {
    pub total_circuits: i64,
    pub active_circuits: i64,
    pub inactive_circuits: i64,
    pub total_monthly_cost: f64,
}

/// Folds circuit rows into the dashboard summary.
///
/// Every row contributes to the total and, with a cost recorded, to the cost
/// sum; only `Active` and `Inactive` rows feed the two status counters, so
/// the pair may sum to less than the total.
pub fn aggregate(rows: &[CircuitCostRow]) -> CircuitStats {
    let mut stats = CircuitStats {
        total_circuits: rows.len() as i64,
        active_circuits: 0,
        inactive_circuits: 0,
        total_monthly_cost: 0.0,
    };

    for row in rows {
        match row.status {
            CircuitStatus::Active => stats.active_circuits += 1,
            CircuitStatus::Inactive => stats.inactive_circuits += 1,
            CircuitStatus::Pending | CircuitStatus::Decommissioned => {}
        }
        stats.total_monthly_cost += row.monthly_cost.unwrap_or(0.0);
    }

    stats
}

/// Loads the cost projection of every circuit and aggregates it.
pub async fn circuit_stats(pool: &SqlitePool) -> Result<CircuitStats, sqlx::Error> {
    let rows = queries::circuit_cost_rows(pool).await?;
    Ok(aggregate(&rows))
}
