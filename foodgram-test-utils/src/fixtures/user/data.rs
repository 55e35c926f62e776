use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::MOCK_PASSWORD_HASH, error::TestError, model::UserModel, TestContext};

impl TestContext {
    /// Access user fixture methods.
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the provided password hash.
    ///
    /// The email is `<username>@example.com` and the first and last names are derived
    /// from the username.
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::FoodgramUser::insert(entity::foodgram_user::ActiveModel {
                email: ActiveValue::Set(format!("{username}@example.com")),
                username: ActiveValue::Set(username.to_string()),
                first_name: ActiveValue::Set(format!("{username} first")),
                last_name: ActiveValue::Set(format!("{username} last")),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                avatar: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user that cannot log in.
    pub async fn insert_mock_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(username, MOCK_PASSWORD_HASH).await
    }

    /// Insert a follow relation from `user_id` to `author_id`.
    pub async fn insert_follow(
        &self,
        user_id: i32,
        author_id: i32,
    ) -> Result<entity::follow::Model, TestError> {
        Ok(
            entity::prelude::Follow::insert(entity::follow::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                author_id: ActiveValue::Set(author_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
