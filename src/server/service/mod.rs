//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories and own transaction boundaries. Every
//! write that touches more than one row runs inside a single transaction.

pub mod auth;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod relation;
pub mod shopping_list;
pub mod user;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::Error;

/// Whether a database error was caused by a unique or primary key constraint
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Whether a database error was caused by a row referencing a missing parent row
pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

/// Reports a foreign key violation in `result` as `missing`
///
/// A parent row deleted after the caller looked it up fails the write on its foreign key.
pub(crate) fn missing_on_foreign_key<T>(
    result: Result<T, Error>,
    missing: impl Into<Error>,
) -> Result<T, Error> {
    match result {
        Err(Error::DbErr(err)) if is_foreign_key_violation(&err) => Err(missing.into()),
        result => result,
    }
}
