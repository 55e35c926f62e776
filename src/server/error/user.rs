use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Field {field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("Field {field} must be at most {max} characters long")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("Username may only contain letters, digits and @/./+/-/_ characters")]
    InvalidUsername,
    #[error("Username {0:?} is reserved")]
    ReservedUsername(String),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("A user with this username already exists")]
    UsernameTaken,
    #[error("A user with this email already exists")]
    EmailTaken,
    #[error("A user with this email or username already exists")]
    AlreadyRegistered,
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
    #[error("Current password is incorrect")]
    WrongCurrentPassword,
    #[error("User ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            err => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        }
    }
}
