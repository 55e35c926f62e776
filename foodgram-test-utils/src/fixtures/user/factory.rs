//! Factory functions for generating mock user database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of DTO conversions.

use chrono::Utc;

use crate::{constant::MOCK_PASSWORD_HASH, model::UserModel};

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `id` - Record id of the user
/// - `username` - Username, also used to derive the email and names
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        email: format!("{username}@example.com"),
        username: username.to_string(),
        first_name: format!("{username} first"),
        last_name: format!("{username} last"),
        password_hash: MOCK_PASSWORD_HASH.to_string(),
        avatar: None,
        created_at: Utc::now().naive_utc(),
    }
}
