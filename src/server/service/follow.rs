//! Subscriptions of users to recipe authors.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::PaginatedDto, user::UserWithRecipesDto},
    server::{
        data::{recipe::RecipeRepository, user::UserRepository},
        error::{user::UserError, Error},
        model::db::UserModel,
        service::{
            missing_on_foreign_key, recipe::recipe_minified_dto, relation::RelationService,
            user::user_dto,
        },
        util::pagination::Page,
    },
};

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Follows an author
    ///
    /// # Returns
    /// - `Ok(UserWithRecipesDto)` - The followed author with up to `recipes_limit` newest recipes
    /// - `Err(Error::UserError(UserError::NotFound))` - Author does not exist
    /// - `Err(Error::RelationError)` - Already following, or following oneself
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn subscribe(
        &self,
        user_id: i32,
        author_id: i32,
        recipes_limit: Option<u64>,
    ) -> Result<UserWithRecipesDto, Error> {
        let txn = self.db.begin().await?;

        let author = get_author(&txn, author_id).await?;

        missing_on_foreign_key(
            RelationService::<entity::prelude::Follow>::add_in(&txn, user_id, author_id).await,
            UserError::NotFound(author_id),
        )?;

        txn.commit().await?;

        let recipes_count = RecipeRepository::new(self.db)
            .count_by_authors(&[author.id])
            .await?
            .get(&author.id)
            .copied()
            .unwrap_or(0);

        self.with_recipes(author, recipes_count, recipes_limit).await
    }

    /// Stops following an author
    pub async fn unsubscribe(&self, user_id: i32, author_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        get_author(&txn, author_id).await?;
        RelationService::<entity::prelude::Follow>::remove_in(&txn, user_id, author_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Lists one page of the authors a user follows, ordered by username
    pub async fn subscriptions(
        &self,
        user_id: i32,
        page: Page,
        recipes_limit: Option<u64>,
    ) -> Result<PaginatedDto<UserWithRecipesDto>, Error> {
        let (authors, count) = UserRepository::new(self.db)
            .followed_authors(user_id, page.offset(), page.limit)
            .await?;

        let author_ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
        let recipe_counts = RecipeRepository::new(self.db)
            .count_by_authors(&author_ids)
            .await?;

        let mut results = Vec::with_capacity(authors.len());
        for author in authors {
            let recipes_count = recipe_counts.get(&author.id).copied().unwrap_or(0);
            results.push(self.with_recipes(author, recipes_count, recipes_limit).await?);
        }

        Ok(PaginatedDto { count, results })
    }

    /// Builds the entry of an author the viewer follows
    async fn with_recipes(
        &self,
        author: UserModel,
        recipes_count: u64,
        recipes_limit: Option<u64>,
    ) -> Result<UserWithRecipesDto, Error> {
        let recipes = RecipeRepository::new(self.db)
            .latest_by_author(author.id, recipes_limit)
            .await?;

        Ok(UserWithRecipesDto {
            user: user_dto(author, true),
            recipes: recipes.into_iter().map(recipe_minified_dto).collect(),
            recipes_count,
        })
    }
}

async fn get_author<C: ConnectionTrait>(db: &C, author_id: i32) -> Result<UserModel, Error> {
    Ok(UserRepository::new(db)
        .get_by_id(author_id)
        .await?
        .ok_or(UserError::NotFound(author_id))?)
}
