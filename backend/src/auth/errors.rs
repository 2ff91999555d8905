//! Custom error types specific to authentication failures.
//!
//! This module defines the set of errors that can occur during registration,
//! login, and token validation, and maps them onto the application-wide
//! error surface.

use thiserror::Error;

use crate::errors::ApiError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account already exists for {0}")]
    EmailTaken(String),

    #[error("token rejected: {0}")]
    TokenRejected(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::EmailTaken("this address".to_string());
            }
        }
        Self::Database(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            AuthError::EmailTaken(_) => Self::Conflict(err.to_string()),
            AuthError::TokenRejected(_) => Self::Unauthorized(err.to_string()),
            AuthError::Validation(msg) => Self::Validation(msg),
            AuthError::Database(msg) => Self::Database(msg),
        }
    }
}
