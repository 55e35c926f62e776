use sea_orm::DatabaseConnection;

use crate::server::util::password::PasswordHasher;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub hasher: PasswordHasher,
    /// Base URL used to build recipe short links, without a trailing slash
    pub public_url: String,
}
