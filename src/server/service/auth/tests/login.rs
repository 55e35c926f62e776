use crate::{
    model::user::LoginDto,
    server::{
        error::{auth::AuthError, Error},
        service::auth::AuthService,
        util::password::PasswordHasher,
    },
};

use super::*;

fn credentials(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Expect a registered user to log in with any casing of their email
#[tokio::test]
async fn logs_in_registered_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let hasher = PasswordHasher::new(10);

    let auth_service = AuthService::new(&test.db, &hasher);
    let user = auth_service
        .register(registration("alice", "alice@example.com"))
        .await
        .unwrap();

    let result = auth_service
        .login(credentials("Alice@Example.com", TEST_PASSWORD))
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

#[tokio::test]
async fn fails_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let hasher = PasswordHasher::new(10);

    let auth_service = AuthService::new(&test.db, &hasher);
    auth_service
        .register(registration("alice", "alice@example.com"))
        .await
        .unwrap();

    let result = auth_service
        .login(credentials("alice@example.com", "wrong password"))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let hasher = PasswordHasher::new(10);

    let auth_service = AuthService::new(&test.db, &hasher);
    let result = auth_service
        .login(credentials("nobody@example.com", TEST_PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect users with an unusable password hash to never log in
#[tokio::test]
async fn fails_for_unusable_password_hash() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("alice")
        .build()
        .await?;
    let hasher = PasswordHasher::new(10);

    let auth_service = AuthService::new(&test.db, &hasher);
    let result = auth_service
        .login(credentials("alice@example.com", "!unusable"))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}
