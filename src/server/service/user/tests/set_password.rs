use sea_orm::EntityTrait;

use crate::{
    model::user::SetPasswordDto,
    server::{
        error::{user::UserError, Error},
        service::user::UserService,
        util::password::PasswordHasher,
    },
};

use super::*;

fn passwords(current: &str, new: &str) -> SetPasswordDto {
    SetPasswordDto {
        current_password: current.to_string(),
        new_password: new.to_string(),
    }
}

/// Expect the new password to verify against the stored hash
#[tokio::test]
async fn replaces_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let hasher = PasswordHasher::new(10);
    let alice = test
        .user()
        .insert_user("alice", &hasher.hash(TEST_PASSWORD))
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .set_password(&hasher, alice.id, passwords(TEST_PASSWORD, "new password 1"))
        .await;

    assert!(result.is_ok());
    let stored = entity::prelude::FoodgramUser::find_by_id(alice.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(hasher.verify("new password 1", &stored.password_hash));
    assert!(!hasher.verify(TEST_PASSWORD, &stored.password_hash));

    Ok(())
}

#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let hasher = PasswordHasher::new(10);
    let alice = test
        .user()
        .insert_user("alice", &hasher.hash(TEST_PASSWORD))
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .set_password(&hasher, alice.id, passwords("wrong password", "new password 1"))
        .await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::WrongCurrentPassword))
    ));

    Ok(())
}

#[tokio::test]
async fn rejects_short_new_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let hasher = PasswordHasher::new(10);
    let alice = test
        .user()
        .insert_user("alice", &hasher.hash(TEST_PASSWORD))
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .set_password(&hasher, alice.id, passwords(TEST_PASSWORD, "short"))
        .await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::PasswordTooShort { .. }))
    ));

    Ok(())
}
