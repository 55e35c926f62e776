//! User profile service layer.
//!
//! Profiles are rendered for a viewer: `is_subscribed` tells whether the viewer follows the
//! profile owner and is always false for anonymous viewers.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{AvatarDto, SetPasswordDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        model::db::UserModel,
        service::{auth::validation::validate_password, relation::RelationService},
        util::password::PasswordHasher,
    },
};

/// Maps a user model to its public profile
pub fn user_dto(user: UserModel, is_subscribed: bool) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        username: user.username,
        first_name: user.first_name,
        last_name: user.last_name,
        is_subscribed,
        avatar: user.avatar,
    }
}

/// Service for reading and updating user profiles.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the profile of a user as seen by the viewer.
    ///
    /// # Arguments
    /// - `viewer_id` - ID of the requesting user, `None` for anonymous requests
    /// - `user_id` - ID of the profile to retrieve
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Profile with `is_subscribed` resolved for the viewer
    /// - `Err(Error::UserError(UserError::NotFound))` - User does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_profile(&self, viewer_id: Option<i32>, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        let is_subscribed = RelationService::<entity::prelude::Follow>::new(self.db)
            .contains(viewer_id, user.id)
            .await?;

        Ok(user_dto(user, is_subscribed))
    }

    /// Replaces the password of a user after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(Error::UserError(UserError::WrongCurrentPassword))` - Current password does not match
    /// - `Err(Error::UserError(UserError::PasswordTooShort))` - New password fails validation
    /// - `Err(Error::UserError(UserError::NotFound))` - User does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn set_password(
        &self,
        hasher: &PasswordHasher,
        user_id: i32,
        passwords: SetPasswordDto,
    ) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        if !hasher
            .verify_blocking(passwords.current_password, user.password_hash)
            .await?
        {
            return Err(UserError::WrongCurrentPassword.into());
        }

        validate_password(&passwords.new_password)?;

        let password_hash = hasher.hash_blocking(passwords.new_password).await?;
        user_repo
            .update_password(user_id, password_hash)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(())
    }

    pub async fn set_avatar(&self, user_id: i32, avatar: AvatarDto) -> Result<AvatarDto, Error> {
        let avatar = avatar.avatar.trim().to_string();
        if avatar.is_empty() {
            return Err(UserError::EmptyField { field: "avatar" }.into());
        }

        let user = UserRepository::new(self.db)
            .update_avatar(user_id, Some(avatar))
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(AvatarDto {
            avatar: user.avatar.unwrap_or_default(),
        })
    }

    pub async fn delete_avatar(&self, user_id: i32) -> Result<(), Error> {
        UserRepository::new(self.db)
            .update_avatar(user_id, None)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(())
    }
}
