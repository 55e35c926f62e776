use crate::{
    model::user::CreateUserDto,
    server::{
        data::user::{NewUser, UserRepository},
        error::{user::UserError, Error},
        model::db::UserModel,
        service::{
            auth::{
                normalize_email,
                validation::{validate_email, validate_name, validate_password, validate_username},
                AuthService,
            },
            is_unique_violation,
        },
    },
};

impl<'a> AuthService<'a> {
    /// Registers a new user account.
    ///
    /// The email is stored lower cased and the password is stored hashed.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::UserError)` - Invalid registration data, or the email or username is taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, registration: CreateUserDto) -> Result<UserModel, Error> {
        let email = normalize_email(&registration.email);
        let username = registration.username.trim().to_string();
        let first_name = registration.first_name.trim().to_string();
        let last_name = registration.last_name.trim().to_string();

        validate_email(&email)?;
        validate_username(&username)?;
        validate_name("first_name", &first_name)?;
        validate_name("last_name", &last_name)?;
        validate_password(&registration.password)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&email).await? {
            return Err(UserError::EmailTaken.into());
        }
        if user_repo.username_exists(&username).await? {
            return Err(UserError::UsernameTaken.into());
        }

        let password_hash = self.hasher.hash_blocking(registration.password).await?;

        let user = match user_repo
            .create(NewUser {
                email,
                username,
                first_name,
                last_name,
                password_hash,
            })
            .await
        {
            Ok(user) => user,
            // A concurrent registration claimed the email or username after the checks above
            Err(err) if is_unique_violation(&err) => return Err(UserError::AlreadyRegistered.into()),
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Registered user ID {} ({})", user.id, user.username);

        Ok(user)
    }
}
