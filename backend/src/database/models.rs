//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database, together with the enumerated value sets the schema
//! constrains and the filter/payload objects the query layer accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Importance tier of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Criticality {
    Low,
    Medium,
    High,
}

impl Default for Criticality {
    fn default() -> Self {
        Self::Low
    }
}

/// Lifecycle state of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum CircuitStatus {
    Active,
    Inactive,
    Pending,
    Decommissioned,
}

/// Console access level of a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Viewer,
}

impl Default for Role {
    fn default() -> Self {
        Self::Viewer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User-settable fields of a company; identity and timestamps are assigned
/// by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub email: String,
}

impl NewCompany {
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("phone", &self.phone),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} is required"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyFilter {
    pub search: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub criticality: Criticality,
    pub company_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A location row joined with the name of its owning company.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LocationWithCompany {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub criticality: Criticality,
    pub company_id: String,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User-settable fields of a location, also used for full-field updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocation {
    pub company_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(default)]
    pub criticality: Criticality,
}

impl NewLocation {
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("company_id", &self.company_id),
            ("name", &self.name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} is required"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationFilter {
    pub search: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub criticality: Option<String>,
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Circuit {
    pub id: String,
    pub carrier: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub circuit_type: String,
    pub status: CircuitStatus,
    pub bandwidth: String,
    pub monthly_cost: Option<f64>,
    pub location_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A circuit row joined with its location's name and, transitively, the
/// name of the company owning that location.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CircuitWithLocation {
    pub id: String,
    pub carrier: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub circuit_type: String,
    pub status: CircuitStatus,
    pub bandwidth: String,
    pub monthly_cost: Option<f64>,
    pub location_id: String,
    pub location_name: String,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CircuitFilter {
    pub status: Option<String>,
    pub location_id: Option<String>,
}

/// Status and cost projection of a circuit, the input to the dashboard
/// aggregate.
#[derive(Debug, Clone, FromRow)]
pub struct CircuitCostRow {
    pub status: CircuitStatus,
    pub monthly_cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A profile row joined with the account e-mail it belongs to, for the
/// admin listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileWithAccount {
    pub id: String,
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Role,
    pub account_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a profile's contact fields; absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
