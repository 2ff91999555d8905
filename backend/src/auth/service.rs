//! Core business logic for the authentication system.
//!
//! This service handles user creation, password hashing, token issuance, and
//! token validation. It orchestrates interactions between the handlers and
//! the database.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::errors::AuthError;
use crate::auth::models::{Claims, TokenResponse, UserAccount};
use crate::config::Config;

/// Digests a password with a per-account salt. The stored form is
/// `salt$hex(sha256(salt + password))`.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    let digest = salted_digest(&salt, password);
    format!("{salt}${digest}")
}

/// Checks a candidate password against a stored `salt$digest` pair.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    salted_digest(salt, password) == digest
}

fn salted_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Signs an access token for the given account id.
pub fn issue_token(config: &Config, user_id: &str) -> Result<TokenResponse, AuthError> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: Utc::now().timestamp() + config.token_ttl_secs,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|err| AuthError::TokenRejected(err.to_string()))?;

    Ok(TokenResponse::bearer(token, config.token_ttl_secs))
}

/// Validates a token's signature and expiry and returns its claims.
pub fn decode_token(config: &Config, token: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| AuthError::TokenRejected(err.to_string()))
}

/// Creates a new account and returns it.
pub async fn create_account(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<UserAccount, AuthError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AuthError::Validation("a valid email is required".to_string()));
    }
    if password.len() < 8 {
        return Err(AuthError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }

    let account = sqlx::query_as::<_, UserAccount>(
        "INSERT INTO users (id, email, password_hash, created_at) \
         VALUES (?, ?, ?, ?) \
         RETURNING id, email, password_hash, created_at",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&email)
    .bind(hash_password(password))
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|err| match AuthError::from(err) {
        AuthError::EmailTaken(_) => AuthError::EmailTaken(email.clone()),
        other => other,
    })?;

    Ok(account)
}

/// Verifies credentials and returns the matching account.
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<UserAccount, AuthError> {
    let email = email.trim().to_lowercase();
    let account = sqlx::query_as::<_, UserAccount>(
        "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await?;

    // Unknown accounts still run one digest comparison.
    match account {
        Some(account) if verify_password(password, &account.password_hash) => Ok(account),
        Some(_) | None => {
            verify_password(password, "missing$missing");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Loads an account by id, as named by a token's subject claim.
pub async fn find_account(pool: &SqlitePool, user_id: &str) -> Result<Option<UserAccount>, AuthError> {
    let account = sqlx::query_as::<_, UserAccount>(
        "SELECT id, email, password_hash, created_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(account)
}
