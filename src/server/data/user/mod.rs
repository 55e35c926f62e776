use chrono::Utc;
use migration::Query;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::UserModel;

/// Fields of a user account about to be registered
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, user: NewUser) -> Result<UserModel, DbErr> {
        let user = entity::foodgram_user::ActiveModel {
            email: ActiveValue::Set(user.email),
            username: ActiveValue::Set(user.username),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            password_hash: ActiveValue::Set(user.password_hash),
            avatar: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::FoodgramUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Returns the users with the provided IDs ordered by username
    ///
    /// IDs without a matching user are skipped.
    pub async fn get_many_by_ids(&self, user_ids: &[i32]) -> Result<Vec<UserModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Id.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::foodgram_user::Column::Username)
            .all(self.db)
            .await
    }

    /// Returns one page of the authors followed by a user, ordered by username, and the
    /// total number of followed authors
    pub async fn followed_authors(
        &self,
        user_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<UserModel>, u64), DbErr> {
        let select = entity::prelude::FoodgramUser::find().filter(
            entity::foodgram_user::Column::Id.in_subquery(
                Query::select()
                    .column(entity::follow::Column::AuthorId)
                    .from(entity::prelude::Follow)
                    .and_where(entity::follow::Column::UserId.eq(user_id))
                    .to_owned(),
            ),
        );

        let count = select.clone().count(self.db).await?;

        let authors = select
            .order_by_asc(entity::foodgram_user::Column::Username)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((authors, count))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FoodgramUser::find()
            .filter(entity::foodgram_user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the password hash of a user
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update_password(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Sets or clears the avatar of a user
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update_avatar(
        &self,
        user_id: i32,
        avatar: Option<String>,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = self.get_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.avatar = ActiveValue::Set(avatar);

        Ok(Some(user_am.update(self.db).await?))
    }
}
