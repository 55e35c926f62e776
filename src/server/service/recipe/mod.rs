//! Recipe service layer.
//!
//! Recipes are written together with their full ingredient list: creating or updating a
//! recipe stores the scalar fields and replaces every ingredient amount in one transaction.
//! Read operations render recipes for a viewer, resolving `is_favorited`,
//! `is_in_shopping_cart` and the author's `is_subscribed` in batches per page.

pub mod ingredients;

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PaginatedDto,
        recipe::{
            RecipeDto, RecipeFilterParams, RecipeIngredientDto, RecipeMinifiedDto, RecipeWriteDto,
            ShortLinkDto,
        },
    },
    server::{
        data::{
            recipe::{RecipeFields, RecipeQuery, RecipeRepository},
            recipe_ingredient::RecipeIngredientRepository,
            user::UserRepository,
        },
        error::{recipe::RecipeError, Error},
        model::db::{RecipeModel, UserModel},
        service::{
            missing_on_foreign_key,
            recipe::ingredients::{replace_ingredients_in, validate_ingredients},
            relation::{RelationService, Toggle},
            user::user_dto,
        },
        util::pagination::Page,
    },
};

pub const MAX_NAME_LEN: usize = 200;

pub fn recipe_minified_dto(recipe: RecipeModel) -> RecipeMinifiedDto {
    RecipeMinifiedDto {
        id: recipe.id,
        name: recipe.name,
        image: recipe.image,
        cooking_time: recipe.cooking_time,
    }
}

/// Checks and trims the scalar fields of a recipe write request
fn validate_fields(recipe: &RecipeWriteDto) -> Result<RecipeFields, RecipeError> {
    let name = recipe.name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(RecipeError::InvalidName { max: MAX_NAME_LEN });
    }

    let text = recipe.text.trim();
    if text.is_empty() {
        return Err(RecipeError::EmptyText);
    }

    if recipe.cooking_time < 1 {
        return Err(RecipeError::InvalidCookingTime(recipe.cooking_time));
    }

    let image = recipe
        .image
        .as_deref()
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .map(str::to_string);

    Ok(RecipeFields {
        name: name.to_string(),
        text: text.to_string(),
        cooking_time: recipe.cooking_time,
        image,
    })
}

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a recipe with its ingredient list.
    ///
    /// # Arguments
    /// - `author_id` - ID of the user publishing the recipe
    /// - `recipe` - Scalar fields and the full ingredient list
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The stored recipe as seen by its author
    /// - `Err(Error::RecipeError)` - Invalid fields, ingredient list or unknown ingredient
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was stored
    pub async fn create(&self, author_id: i32, recipe: RecipeWriteDto) -> Result<RecipeDto, Error> {
        let fields = validate_fields(&recipe)?;
        let entries = validate_ingredients(&recipe.ingredients)?;

        let txn = self.db.begin().await?;

        let created = RecipeRepository::new(&txn).create(author_id, fields).await?;
        replace_ingredients_in(&txn, created.id, &entries).await?;

        txn.commit().await?;

        tracing::debug!("User ID {} created recipe ID {}", author_id, created.id);

        self.get(Some(author_id), created.id).await
    }

    /// Overwrites a recipe and its ingredient list.
    ///
    /// Omitting the image keeps the current one.
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The updated recipe as seen by its author
    /// - `Err(Error::RecipeError(RecipeError::RecipeNotFound))` - Recipe does not exist
    /// - `Err(Error::RecipeError(RecipeError::NotAuthor))` - User is not the recipe's author
    /// - `Err(Error::RecipeError)` - Invalid fields, ingredient list or unknown ingredient
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn update(
        &self,
        user_id: i32,
        recipe_id: i32,
        recipe: RecipeWriteDto,
    ) -> Result<RecipeDto, Error> {
        let fields = validate_fields(&recipe)?;
        let entries = validate_ingredients(&recipe.ingredients)?;

        let txn = self.db.begin().await?;
        let recipe_repo = RecipeRepository::new(&txn);

        let existing = recipe_repo
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::RecipeNotFound(recipe_id))?;
        ensure_author(&existing, user_id)?;

        recipe_repo.update(existing, fields).await?;
        replace_ingredients_in(&txn, recipe_id, &entries).await?;

        txn.commit().await?;

        self.get(Some(user_id), recipe_id).await
    }

    /// Deletes a recipe along with its ingredients, favorites and cart entries
    pub async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        let recipe = self.get_model(recipe_id).await?;
        ensure_author(&recipe, user_id)?;

        RecipeRepository::new(self.db).delete(recipe_id).await?;

        tracing::debug!("User ID {} deleted recipe ID {}", user_id, recipe_id);

        Ok(())
    }

    /// Retrieves a recipe as seen by the viewer
    pub async fn get(&self, viewer_id: Option<i32>, recipe_id: i32) -> Result<RecipeDto, Error> {
        let recipe = self.get_model(recipe_id).await?;

        let mut recipes = self.recipe_dtos(viewer_id, vec![recipe]).await?;

        recipes
            .pop()
            .ok_or(RecipeError::RecipeNotFound(recipe_id).into())
    }

    /// Lists one page of recipes, newest first.
    ///
    /// The favorited and shopping cart filters only apply to an authenticated viewer and
    /// are ignored for anonymous requests.
    pub async fn list(
        &self,
        viewer_id: Option<i32>,
        filter: RecipeFilterParams,
        page: Page,
    ) -> Result<PaginatedDto<RecipeDto>, Error> {
        let query = RecipeQuery {
            author_id: filter.author,
            favorited_by: viewer_id.filter(|_| filter.is_favorited == Some(1)),
            in_cart_of: viewer_id.filter(|_| filter.is_in_shopping_cart == Some(1)),
        };

        let (recipes, count) = RecipeRepository::new(self.db)
            .list(query, page.offset(), page.limit)
            .await?;

        let results = self.recipe_dtos(viewer_id, recipes).await?;

        Ok(PaginatedDto { count, results })
    }

    /// Builds the short link of a recipe under the provided public base URL
    pub async fn short_link(&self, recipe_id: i32, public_url: &str) -> Result<ShortLinkDto, Error> {
        let recipe = self.get_model(recipe_id).await?;

        Ok(ShortLinkDto {
            short_link: format!("{}/recipes/{}", public_url.trim_end_matches('/'), recipe.id),
        })
    }

    pub async fn add_favorite(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<RecipeMinifiedDto, Error> {
        self.add_relation::<entity::prelude::Favorite>(user_id, recipe_id)
            .await
    }

    pub async fn remove_favorite(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        self.remove_relation::<entity::prelude::Favorite>(user_id, recipe_id)
            .await
    }

    pub async fn add_to_cart(&self, user_id: i32, recipe_id: i32) -> Result<RecipeMinifiedDto, Error> {
        self.add_relation::<entity::prelude::ShoppingCart>(user_id, recipe_id)
            .await
    }

    pub async fn remove_from_cart(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        self.remove_relation::<entity::prelude::ShoppingCart>(user_id, recipe_id)
            .await
    }

    /// Adds the pair after checking the recipe in the same transaction
    ///
    /// A recipe deleted concurrently fails the insert on its foreign key, reported as
    /// `RecipeNotFound` like a recipe that was never there.
    async fn add_relation<E: Toggle>(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<RecipeMinifiedDto, Error> {
        let txn = self.db.begin().await?;

        let recipe = RecipeRepository::new(&txn)
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::RecipeNotFound(recipe_id))?;

        missing_on_foreign_key(
            RelationService::<E>::add_in(&txn, user_id, recipe_id).await,
            RecipeError::RecipeNotFound(recipe_id),
        )?;

        txn.commit().await?;

        Ok(recipe_minified_dto(recipe))
    }

    async fn remove_relation<E: Toggle>(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        RecipeRepository::new(&txn)
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::RecipeNotFound(recipe_id))?;

        RelationService::<E>::remove_in(&txn, user_id, recipe_id).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn get_model(&self, recipe_id: i32) -> Result<RecipeModel, Error> {
        Ok(RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::RecipeNotFound(recipe_id))?)
    }

    /// Renders recipes for the viewer, keeping their order
    async fn recipe_dtos(
        &self,
        viewer_id: Option<i32>,
        recipes: Vec<RecipeModel>,
    ) -> Result<Vec<RecipeDto>, Error> {
        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();
        let mut author_ids: Vec<i32> = recipes.iter().map(|r| r.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<i32, UserModel> = UserRepository::new(self.db)
            .get_many_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|author| (author.id, author))
            .collect();

        let mut ingredients: HashMap<i32, Vec<RecipeIngredientDto>> = HashMap::new();
        for (row, ingredient) in RecipeIngredientRepository::new(self.db)
            .get_by_recipe_ids(&recipe_ids)
            .await?
        {
            let ingredient = ingredient.ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find ingredient ID {} of recipe ID {}",
                    row.ingredient_id, row.recipe_id
                ))
            })?;

            ingredients
                .entry(row.recipe_id)
                .or_default()
                .push(RecipeIngredientDto {
                    id: ingredient.id,
                    name: ingredient.name,
                    measurement_unit: ingredient.measurement_unit,
                    amount: row.amount.normalize(),
                });
        }

        let favorited = RelationService::<entity::prelude::Favorite>::new(self.db)
            .present_among(viewer_id, &recipe_ids)
            .await?;
        let in_cart = RelationService::<entity::prelude::ShoppingCart>::new(self.db)
            .present_among(viewer_id, &recipe_ids)
            .await?;
        let subscribed: HashSet<i32> = RelationService::<entity::prelude::Follow>::new(self.db)
            .present_among(viewer_id, &author_ids)
            .await?;

        recipes
            .into_iter()
            .map(|recipe| {
                let author = authors.get(&recipe.author_id).cloned().ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find author ID {} of recipe ID {}",
                        recipe.author_id, recipe.id
                    ))
                })?;

                Ok(RecipeDto {
                    id: recipe.id,
                    author: user_dto(author, subscribed.contains(&recipe.author_id)),
                    ingredients: ingredients.remove(&recipe.id).unwrap_or_default(),
                    is_favorited: favorited.contains(&recipe.id),
                    is_in_shopping_cart: in_cart.contains(&recipe.id),
                    name: recipe.name,
                    image: recipe.image,
                    text: recipe.text,
                    cooking_time: recipe.cooking_time,
                })
            })
            .collect()
    }
}

fn ensure_author(recipe: &RecipeModel, user_id: i32) -> Result<(), RecipeError> {
    if recipe.author_id != user_id {
        return Err(RecipeError::NotAuthor {
            user_id,
            recipe_id: recipe.id,
        });
    }

    Ok(())
}
