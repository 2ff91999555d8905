//! End-to-end tests driving the full router over in-memory HTTP.
//!
//! Each test builds the application against a fresh in-memory database and
//! exercises it through `tower::ServiceExt::oneshot`, the same path real
//! requests take.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Request, StatusCode,
    },
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use backend::{app, config::Config, database, AppState};

async fn test_app() -> (Router, AppState) {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: "integration-test-secret".to_string(),
        token_ttl_secs: 3600,
    };
    let db = database::connect(&config.database_url)
        .await
        .expect("in-memory database");
    let state = AppState {
        db,
        config: Arc::new(config),
    };
    (app(state.clone()), state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": "longenough" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["access_token"].as_str().expect("token").to_string()
}

async fn create_company(app: &Router, token: &str, name: &str, city: &str, state: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/companies",
        Some(token),
        Some(json!({
            "name": name,
            "address": "1 Main St",
            "city": city,
            "state": state,
            "phone": "555-0100",
            "email": "noc@example.com",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("company id").to_string()
}

#[tokio::test]
async fn public_endpoints_need_no_token() {
    let (app, _) = test_app().await;

    let (status, body) = send(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Welcome to CircuitDesk!".to_string()));

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "circuitdesk-backend");
}

#[tokio::test]
async fn inventory_api_rejects_missing_and_bad_tokens() {
    let (app, _) = test_app().await;

    let (status, body) = send(&app, "GET", "/api/companies", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No authenticated user");

    let (status, _) = send(&app, "GET", "/api/companies", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_login_and_refresh_flow() {
    let (app, _) = test_app().await;

    let token = register(&app, "ops@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ops@example.com", "password": "longenough" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ops@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, "POST", "/api/auth/refresh", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].is_string());

    let (status, _) = send(&app, "POST", "/api/auth/refresh", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let (app, _) = test_app().await;

    register(&app, "dup@example.com").await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "email": "dup@example.com", "password": "otherpass1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn company_crud_and_filters() {
    let (app, _) = test_app().await;
    let token = register(&app, "ops@example.com").await;

    create_company(&app, &token, "Acme Fiber", "Sacramento", "CA").await;
    create_company(&app, &token, "Beacon Net", "Albany", "NY").await;

    let (status, body) = send(&app, "GET", "/api/companies", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", "/api/companies?state=CA", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Acme Fiber");

    let (status, body) = send(
        &app,
        "GET",
        "/api/companies?search=beac",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap()[0]["name"], "Beacon Net");

    let (status, _) = send(&app, "GET", "/api/companies/no-such-id", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_company_payload_writes_nothing() {
    let (app, _) = test_app().await;
    let token = register(&app, "ops@example.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/companies",
        Some(&token),
        Some(json!({
            "name": "  ",
            "address": "1 Main St",
            "city": "Sacramento",
            "state": "CA",
            "phone": "555-0100",
            "email": "noc@example.com",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("name"));

    let (_, body) = send(&app, "GET", "/api/companies", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn location_lifecycle_embeds_company_name() {
    let (app, _) = test_app().await;
    let token = register(&app, "ops@example.com").await;
    let company_id = create_company(&app, &token, "Acme Fiber", "Sacramento", "CA").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/locations",
        Some(&token),
        Some(json!({
            "company_id": company_id,
            "name": "Sacramento POP",
            "address": "2 Grid Ave",
            "city": "Sacramento",
            "state": "CA",
            "zip_code": "95814",
            "country": "US",
            "criticality": "High",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let location_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["criticality"], "High");

    let (status, body) = send(&app, "GET", "/api/locations", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["company_name"], "Acme Fiber");

    let uri = format!("/api/locations/{location_id}");
    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({
            "company_id": rows[0]["company_id"],
            "name": "Sacramento POP-2",
            "address": "2 Grid Ave",
            "city": "Sacramento",
            "state": "CA",
            "zip_code": "95814",
            "country": "US",
            "criticality": "Medium",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Sacramento POP-2");
    assert_eq!(body["criticality"], "Medium");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/locations/no-such-id",
        Some(&token),
        Some(json!({
            "company_id": rows[0]["company_id"],
            "name": "Ghost",
            "address": "2 Grid Ave",
            "city": "Sacramento",
            "state": "CA",
            "zip_code": "95814",
            "country": "US",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn location_missing_field_is_rejected_before_write() {
    let (app, _) = test_app().await;
    let token = register(&app, "ops@example.com").await;
    let company_id = create_company(&app, &token, "Acme Fiber", "Sacramento", "CA").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/locations",
        Some(&token),
        Some(json!({
            "company_id": company_id,
            "name": "Sacramento POP",
            "address": "",
            "city": "Sacramento",
            "state": "CA",
            "zip_code": "95814",
            "country": "US",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("address"));

    let (_, body) = send(&app, "GET", "/api/locations", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn dashboard_stats_reflect_circuit_table() {
    let (app, state) = test_app().await;
    let token = register(&app, "ops@example.com").await;
    let company_id = create_company(&app, &token, "Acme Fiber", "Sacramento", "CA").await;

    let (_, location) = send(
        &app,
        "POST",
        "/api/locations",
        Some(&token),
        Some(json!({
            "company_id": company_id,
            "name": "Sacramento POP",
            "address": "2 Grid Ave",
            "city": "Sacramento",
            "state": "CA",
            "zip_code": "95814",
            "country": "US",
        })),
    )
    .await;
    let location_id = location["id"].as_str().unwrap();

    for (id, status, cost) in [
        ("ckt-1", "Active", Some(100.0)),
        ("ckt-2", "Inactive", Some(50.0)),
        ("ckt-3", "Active", None),
    ] {
        sqlx::query(
            "INSERT INTO circuits (id, carrier, type, status, bandwidth, monthly_cost, \
                                   location_id, created_at, updated_at) \
             VALUES (?, 'Lumen', 'DIA', ?, '1 Gbps', ?, ?, datetime('now'), datetime('now'))",
        )
        .bind(id)
        .bind(status)
        .bind(cost)
        .bind(location_id)
        .execute(&state.db)
        .await
        .unwrap();
    }

    let (status, body) = send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCircuits"], 3);
    assert_eq!(body["activeCircuits"], 2);
    assert_eq!(body["inactiveCircuits"], 1);
    assert_eq!(body["totalMonthlyCost"], 150.0);

    let uri = format!("/api/circuits?status=Active&location_id={location_id}");
    let (status, body) = send(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["location_name"], "Sacramento POP");
    assert_eq!(rows[0]["company_name"], "Acme Fiber");
    assert_eq!(rows[0]["type"], "DIA");
}

#[tokio::test]
async fn first_profile_access_creates_viewer() {
    let (app, _) = test_app().await;
    let token = register(&app, "ops@example.com").await;

    let (status, body) = send(&app, "GET", "/api/profiles/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "viewer");
    let profile_id = body["id"].clone();

    let (_, body) = send(&app, "GET", "/api/profiles/me", Some(&token), None).await;
    assert_eq!(body["id"], profile_id);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/profiles/me",
        Some(&token),
        Some(json!({ "first_name": "Dana", "phone": "555-0101" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Dana");
    assert_eq!(body["phone"], "555-0101");
    assert!(body["last_name"].is_null());
}

#[tokio::test]
async fn role_management_is_admin_only() {
    let (app, state) = test_app().await;
    let admin_token = register(&app, "admin@example.com").await;
    let viewer_token = register(&app, "viewer@example.com").await;

    // Materialize both profiles, then promote the first caller directly.
    let (_, admin_profile) = send(&app, "GET", "/api/profiles/me", Some(&admin_token), None).await;
    let (_, viewer_profile) =
        send(&app, "GET", "/api/profiles/me", Some(&viewer_token), None).await;

    let (status, _) = send(&app, "GET", "/api/profiles", Some(&viewer_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin_user_id = admin_profile["user_id"].as_str().unwrap();
    sqlx::query("UPDATE user_profiles SET role = 'admin' WHERE user_id = ?")
        .bind(admin_user_id)
        .execute(&state.db)
        .await
        .unwrap();

    let (status, body) = send(&app, "GET", "/api/profiles", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["account_email"].is_string()));

    let viewer_user_id = viewer_profile["user_id"].as_str().unwrap();
    let uri = format!("/api/profiles/{viewer_user_id}/role");
    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(&admin_token),
        Some(json!({ "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/profiles/no-such-user/role",
        Some(&admin_token),
        Some(json!({ "role": "viewer" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
