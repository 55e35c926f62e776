use std::collections::HashMap;

use chrono::Utc;
use migration::Query;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::{RecipeModel, UserModel};

/// Scalar fields of a recipe
pub struct RecipeFields {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    /// New image reference, `None` keeps the current image on update
    pub image: Option<String>,
}

/// Filters applied when listing recipes
#[derive(Clone, Copy, Debug, Default)]
pub struct RecipeQuery {
    pub author_id: Option<i32>,
    /// Only recipes favorited by this user
    pub favorited_by: Option<i32>,
    /// Only recipes in the shopping cart of this user
    pub in_cart_of: Option<i32>,
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, author_id: i32, fields: RecipeFields) -> Result<RecipeModel, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(fields.name),
            image: ActiveValue::Set(fields.image),
            text: ActiveValue::Set(fields.text),
            cooking_time: ActiveValue::Set(fields.cooking_time),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    /// Overwrites the scalar fields of an existing recipe
    pub async fn update(
        &self,
        recipe: RecipeModel,
        fields: RecipeFields,
    ) -> Result<RecipeModel, DbErr> {
        let mut recipe_am = recipe.into_active_model();
        recipe_am.name = ActiveValue::Set(fields.name);
        recipe_am.text = ActiveValue::Set(fields.text);
        recipe_am.cooking_time = ActiveValue::Set(fields.cooking_time);
        if let Some(image) = fields.image {
            recipe_am.image = ActiveValue::Set(Some(image));
        }

        recipe_am.update(self.db).await
    }

    pub async fn get_by_id(&self, recipe_id: i32) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await
    }

    /// Returns the recipes with the provided IDs along with their authors, newest first
    pub async fn get_many_with_authors(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(RecipeModel, Option<UserModel>)>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Recipe::find()
            .find_also_related(entity::prelude::FoodgramUser)
            .filter(entity::recipe::Column::Id.is_in(recipe_ids.iter().copied()))
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_desc(entity::recipe::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns one page of recipes matching the query, newest first, and the total match count
    pub async fn list(
        &self,
        query: RecipeQuery,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<RecipeModel>, u64), DbErr> {
        let mut select = entity::prelude::Recipe::find();

        if let Some(author_id) = query.author_id {
            select = select.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }

        if let Some(user_id) = query.favorited_by {
            select = select.filter(
                entity::recipe::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::favorite::Column::RecipeId)
                        .from(entity::prelude::Favorite)
                        .and_where(entity::favorite::Column::UserId.eq(user_id))
                        .to_owned(),
                ),
            );
        }

        if let Some(user_id) = query.in_cart_of {
            select = select.filter(
                entity::recipe::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::shopping_cart::Column::RecipeId)
                        .from(entity::prelude::ShoppingCart)
                        .and_where(entity::shopping_cart::Column::UserId.eq(user_id))
                        .to_owned(),
                ),
            );
        }

        let count = select.clone().count(self.db).await?;

        let recipes = select
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_desc(entity::recipe::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((recipes, count))
    }

    /// Returns the newest recipes of an author
    pub async fn latest_by_author(
        &self,
        author_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_desc(entity::recipe::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts published recipes per author
    ///
    /// Authors without recipes are absent from the returned map.
    pub async fn count_by_authors(&self, author_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if author_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts = entity::prelude::Recipe::find()
            .select_only()
            .column(entity::recipe::Column::AuthorId)
            .column_as(entity::recipe::Column::Id.count(), "recipe_count")
            .filter(entity::recipe::Column::AuthorId.is_in(author_ids.iter().copied()))
            .group_by(entity::recipe::Column::AuthorId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(author_id, count)| (author_id, count.max(0) as u64))
            .collect())
    }

    /// Deletes a recipe, cascading to its ingredients, favorites and cart entries
    ///
    /// Returns OK regardless of the recipe existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(self.db)
            .await
    }
}
