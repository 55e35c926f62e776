use crate::{
    model::user::LoginDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::db::UserModel,
        service::auth::{normalize_email, AuthService},
    },
};

impl<'a> AuthService<'a> {
    /// Resolves email and password credentials to a user.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials match the returned user
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - No user matches the credentials
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login(&self, credentials: LoginDto) -> Result<UserModel, Error> {
        let email = normalize_email(&credentials.email);

        let Some(user) = UserRepository::new(self.db).get_by_email(&email).await? else {
            tracing::debug!("Login attempt for unknown email {}", email);

            return Err(AuthError::InvalidCredentials.into());
        };

        if !self
            .hasher
            .verify_blocking(credentials.password, user.password_hash.clone())
            .await?
        {
            tracing::debug!("Wrong password for user ID {}", user.id);

            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
