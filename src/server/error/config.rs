use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup failures of the `foodgram` and `load-ingredients` binaries.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `DATABASE_URL`, or `VALKEY_URL` for the server, is not set.
    #[error("{0} must be set")]
    MissingEnvVar(&'static str),
    /// `BIND_ADDRESS` is not a socket address, or `PASSWORD_HASH_ITERATIONS` does not fit
    /// a `u32`.
    #[error("{var} is invalid: {reason}")]
    InvalidEnvValue { var: &'static str, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::ConfigError;

    /// Expect the variable name in the message but not in the response
    #[test]
    fn names_variable_and_hides_it_from_clients() {
        let err = ConfigError::MissingEnvVar("VALKEY_URL");
        assert_eq!(err.to_string(), "VALKEY_URL must be set");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
