use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, service::relation::RelationKind};

#[derive(Error, Debug)]
pub enum RelationError {
    /// Add was requested for a pair that is already present.
    #[error("ID {object_id} is already in {kind}")]
    AlreadyPresent { kind: RelationKind, object_id: i32 },
    /// Remove was requested for a pair that is not present.
    #[error("ID {object_id} is not in {kind}")]
    NotPresent { kind: RelationKind, object_id: i32 },
    #[error("Users cannot subscribe to themselves")]
    SelfFollow,
}

impl IntoResponse for RelationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
