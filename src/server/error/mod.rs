//! Error types for the Chibcha server application.
//!
//! Domain-specific error enums (configuration, authentication, ticket/account rules) are
//! folded into the top-level [`Error`] with `thiserror`'s `#[from]`. Every error implements
//! `IntoResponse`; expected domain errors map to 4xx responses while unexpected faults are
//! logged and returned as a generic 500.

pub mod auth;
pub mod config;
pub mod domain;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, domain::DomainError},
};

/// Main error type for the Chibcha server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (no account in session, wrong account type, inactive account)
/// - Domain errors (ticket and account rules: not found, permission, state, validation, conflict)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session account missing, unknown or not allowed).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Rejected ticket action or account operation, nothing was persisted.
    #[error(transparent)]
    DomainError(#[from] DomainError),
    /// Internal error indicating a bug or corrupted data.
    ///
    /// This error should never occur in normal operation, for example a ticket without a
    /// current state row.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401/403/404 - For authentication failures
/// - 403/404/409/422 - For rejected domain operations
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DomainError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
