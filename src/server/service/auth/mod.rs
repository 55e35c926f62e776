//! Authentication service layer.
//!
//! Registration and login against email and password credentials. Session handling stays
//! in the controllers, these services only resolve credentials to a user.

pub mod login;
pub mod register;
pub mod validation;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::server::util::password::PasswordHasher;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: &'a PasswordHasher) -> Self {
        Self { db, hasher }
    }
}

/// Normalizes an email for storage and lookup
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
