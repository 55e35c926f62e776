//! Error types for the Foodgram server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, users, recipes, relation toggles). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for error definitions
//! with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod recipe;
pub mod relation;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, recipe::RecipeError, relation::RelationError,
        user::UserError,
    },
};

/// Main error type for the Foodgram server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, credentials)
/// - User errors (registration and profile validation, missing users)
/// - Recipe errors (recipe and ingredient list validation, missing recipes, authorship)
/// - Relation errors (favorite, shopping cart and follow toggles)
/// - External library errors (database, sessions, file and JSON handling)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing session, wrong credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// User account error (invalid registration data, unknown user).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Recipe error (invalid recipe or ingredient list, unknown recipe, not the author).
    #[error(transparent)]
    RecipeError(#[from] RecipeError),
    /// Relation toggle error (already present, not present, self-follow).
    #[error(transparent)]
    RelationError(#[from] RelationError),
    /// Internal error (data which should be impossible given the schema constraints).
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// File or socket error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// JSON decoding error, raised when reading the ingredient catalog.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Blocking task panicked or was cancelled (password hashing).
    #[error(transparent)]
    TaskJoinError(#[from] tokio::task::JoinError),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors provide their own mapping, everything else is treated as an internal
/// server error (500) and logged.
///
/// # Returns
/// - 400 Bad Request - Validation failures and relation toggles in the wrong state
/// - 401 Unauthorized - Missing session or wrong credentials
/// - 403 Forbidden - Recipe changes by someone other than the author
/// - 404 Not Found - Unknown users, recipes or ingredients
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::RecipeError(err) => err.into_response(),
            Self::RelationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
