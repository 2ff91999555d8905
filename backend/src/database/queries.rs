//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations, providing reusable
//! functions for interacting with the database and abstracting the query logic
//! from higher-level services and API handlers. Each function maps one typed
//! request to exactly one SQL statement; backend failures propagate unchanged.

use chrono::Utc;
use sqlx::{QueryBuilder, SqlitePool};
use uuid::Uuid;

use super::models::{
    CircuitCostRow, CircuitFilter, CircuitWithLocation, Company, CompanyFilter, Location,
    LocationFilter, LocationWithCompany, NewCompany, NewLocation, ProfileUpdate,
    ProfileWithAccount, Role, UserProfile,
};

const COMPANY_COLUMNS: &str =
    "id, name, address, city, state, phone, email, created_at, updated_at";

const LOCATION_COLUMNS: &str = "id, name, address, city, state, zip_code, country, \
     criticality, company_id, created_at, updated_at";

const PROFILE_COLUMNS: &str = "id, user_id, first_name, last_name, email, phone, address, \
     role, created_at, updated_at";

/// Treats an absent or blank filter value as "no filter", matching the
/// console's behavior of sending empty strings for cleared selections.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn like_pattern(search: &str) -> String {
    format!("%{}%", search.to_lowercase())
}

/// Companies matching every supplied filter, ordered by name ascending.
/// The search term is a case-insensitive substring match OR'd across
/// name, city, and state.
pub async fn list_companies(
    pool: &SqlitePool,
    filter: &CompanyFilter,
) -> Result<Vec<Company>, sqlx::Error> {
    let mut query = QueryBuilder::new(format!(
        "SELECT {COMPANY_COLUMNS} FROM companies WHERE 1 = 1"
    ));

    if let Some(search) = non_empty(&filter.search) {
        let pattern = like_pattern(search);
        query.push(" AND (lower(name) LIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR lower(city) LIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR lower(state) LIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
    if let Some(state) = non_empty(&filter.state) {
        query.push(" AND state = ");
        query.push_bind(state.to_owned());
    }
    if let Some(city) = non_empty(&filter.city) {
        query.push(" AND city = ");
        query.push_bind(city.to_owned());
    }
    query.push(" ORDER BY name ASC");

    query.build_query_as::<Company>().fetch_all(pool).await
}

pub async fn get_company(pool: &SqlitePool, id: &str) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(&format!(
        "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_company(
    pool: &SqlitePool,
    new: &NewCompany,
) -> Result<Company, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Company>(&format!(
        "INSERT INTO companies (id, name, address, city, state, phone, email, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {COMPANY_COLUMNS}"
    ))
    .bind(Uuid::new_v4().to_string())
    .bind(&new.name)
    .bind(&new.address)
    .bind(&new.city)
    .bind(&new.state)
    .bind(&new.phone)
    .bind(&new.email)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Locations matching every supplied filter, each joined with its company's
/// name, ordered by location name ascending.
pub async fn list_locations(
    pool: &SqlitePool,
    filter: &LocationFilter,
) -> Result<Vec<LocationWithCompany>, sqlx::Error> {
    let mut query = QueryBuilder::new(
        "SELECT l.id, l.name, l.address, l.city, l.state, l.zip_code, l.country, \
                l.criticality, l.company_id, c.name AS company_name, \
                l.created_at, l.updated_at \
         FROM locations l \
         JOIN companies c ON c.id = l.company_id \
         WHERE 1 = 1",
    );

    if let Some(search) = non_empty(&filter.search) {
        let pattern = like_pattern(search);
        query.push(" AND (lower(l.name) LIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR lower(l.city) LIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR lower(l.state) LIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
    if let Some(state) = non_empty(&filter.state) {
        query.push(" AND l.state = ");
        query.push_bind(state.to_owned());
    }
    if let Some(city) = non_empty(&filter.city) {
        query.push(" AND l.city = ");
        query.push_bind(city.to_owned());
    }
    if let Some(criticality) = non_empty(&filter.criticality) {
        query.push(" AND l.criticality = ");
        query.push_bind(criticality.to_owned());
    }
    if let Some(company_id) = non_empty(&filter.company_id) {
        query.push(" AND l.company_id = ");
        query.push_bind(company_id.to_owned());
    }
    query.push(" ORDER BY l.name ASC");

    query
        .build_query_as::<LocationWithCompany>()
        .fetch_all(pool)
        .await
}

pub async fn get_location(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<LocationWithCompany>, sqlx::Error> {
    sqlx::query_as::<_, LocationWithCompany>(
        "SELECT l.id, l.name, l.address, l.city, l.state, l.zip_code, l.country, \
                l.criticality, l.company_id, c.name AS company_name, \
                l.created_at, l.updated_at \
         FROM locations l \
         JOIN companies c ON c.id = l.company_id \
         WHERE l.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_location(
    pool: &SqlitePool,
    new: &NewLocation,
) -> Result<Location, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Location>(&format!(
        "INSERT INTO locations (id, name, address, city, state, zip_code, country, \
                                criticality, company_id, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {LOCATION_COLUMNS}"
    ))
    .bind(Uuid::new_v4().to_string())
    .bind(&new.name)
    .bind(&new.address)
    .bind(&new.city)
    .bind(&new.state)
    .bind(&new.zip_code)
    .bind(&new.country)
    .bind(new.criticality)
    .bind(&new.company_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Full-field update of a location, returning the persisted row or `None`
/// when no such location exists.
pub async fn update_location(
    pool: &SqlitePool,
    id: &str,
    changes: &NewLocation,
) -> Result<Option<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(&format!(
        "UPDATE locations SET name = ?, address = ?, city = ?, state = ?, zip_code = ?, \
                              country = ?, criticality = ?, company_id = ?, updated_at = ? \
         WHERE id = ? \
         RETURNING {LOCATION_COLUMNS}"
    ))
    .bind(&changes.name)
    .bind(&changes.address)
    .bind(&changes.city)
    .bind(&changes.state)
    .bind(&changes.zip_code)
    .bind(&changes.country)
    .bind(changes.criticality)
    .bind(&changes.company_id)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Circuits with their location and company names embedded, ordered by
/// carrier ascending.
pub async fn list_circuits(
    pool: &SqlitePool,
    filter: &CircuitFilter,
) -> Result<Vec<CircuitWithLocation>, sqlx::Error> {
    let mut query = QueryBuilder::new(
        "SELECT ci.id, ci.carrier, ci.type, ci.status, ci.bandwidth, ci.monthly_cost, \
                ci.location_id, l.name AS location_name, c.name AS company_name, \
                ci.created_at, ci.updated_at \
         FROM circuits ci \
         JOIN locations l ON l.id = ci.location_id \
         JOIN companies c ON c.id = l.company_id \
         WHERE 1 = 1",
    );

    if let Some(status) = non_empty(&filter.status) {
        query.push(" AND ci.status = ");
        query.push_bind(status.to_owned());
    }
    if let Some(location_id) = non_empty(&filter.location_id) {
        query.push(" AND ci.location_id = ");
        query.push_bind(location_id.to_owned());
    }
    query.push(" ORDER BY ci.carrier ASC");

    query
        .build_query_as::<CircuitWithLocation>()
        .fetch_all(pool)
        .await
}

pub async fn get_circuit(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<CircuitWithLocation>, sqlx::Error> {
    sqlx::query_as::<_, CircuitWithLocation>(
        "SELECT ci.id, ci.carrier, ci.type, ci.status, ci.bandwidth, ci.monthly_cost, \
                ci.location_id, l.name AS location_name, c.name AS company_name, \
                ci.created_at, ci.updated_at \
         FROM circuits ci \
         JOIN locations l ON l.id = ci.location_id \
         JOIN companies c ON c.id = l.company_id \
         WHERE ci.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Status and monthly cost of every circuit, the raw input of the dashboard
/// aggregate.
pub async fn circuit_cost_rows(pool: &SqlitePool) -> Result<Vec<CircuitCostRow>, sqlx::Error> {
    sqlx::query_as::<_, CircuitCostRow>("SELECT status, monthly_cost FROM circuits")
        .fetch_all(pool)
        .await
}

/// Fetches the profile belonging to `user_id`, creating a default `viewer`
/// profile on first access. Concurrent first access loses the race on
/// `UNIQUE(user_id)` and surfaces the constraint error unchanged.
pub async fn get_profile_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<UserProfile, sqlx::Error> {
    let existing = sqlx::query_as::<_, UserProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = ?"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    if let Some(profile) = existing {
        return Ok(profile);
    }

    let now = Utc::now();
    sqlx::query_as::<_, UserProfile>(&format!(
        "INSERT INTO user_profiles (id, user_id, role, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?) \
         RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(Role::Viewer)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Every profile joined with its account e-mail, newest first.
pub async fn list_profiles(pool: &SqlitePool) -> Result<Vec<ProfileWithAccount>, sqlx::Error> {
    sqlx::query_as::<_, ProfileWithAccount>(
        "SELECT p.id, p.user_id, p.first_name, p.last_name, p.email, p.phone, p.address, \
                p.role, u.email AS account_email, p.created_at, p.updated_at \
         FROM user_profiles p \
         JOIN users u ON u.id = p.user_id \
         ORDER BY p.created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Partial update of a profile's contact fields; absent fields keep their
/// stored values.
pub async fn update_profile(
    pool: &SqlitePool,
    user_id: &str,
    changes: &ProfileUpdate,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        "UPDATE user_profiles SET \
             first_name = COALESCE(?, first_name), \
             last_name  = COALESCE(?, last_name), \
             email      = COALESCE(?, email), \
             phone      = COALESCE(?, phone), \
             address    = COALESCE(?, address), \
             updated_at = ? \
         WHERE user_id = ? \
         RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(&changes.first_name)
    .bind(&changes.last_name)
    .bind(&changes.email)
    .bind(&changes.phone)
    .bind(&changes.address)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn update_role(
    pool: &SqlitePool,
    user_id: &str,
    role: Role,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        "UPDATE user_profiles SET role = ?, updated_at = ? \
         WHERE user_id = ? \
         RETURNING {PROFILE_COLUMNS}"
    ))
    .bind(role)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
