use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{IngredientModel, RecipeModel},
    TestContext,
};

impl TestContext {
    /// Access ingredient, recipe and recipe relation fixture methods.
    pub fn recipe<'a>(&'a self) -> RecipeFixtures<'a> {
        RecipeFixtures { setup: self }
    }
}

pub struct RecipeFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RecipeFixtures<'a> {
    pub async fn insert_ingredient(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> Result<IngredientModel, TestError> {
        Ok(
            entity::prelude::Ingredient::insert(entity::ingredient::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                measurement_unit: ActiveValue::Set(measurement_unit.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a recipe without ingredients.
    pub async fn insert_recipe(
        &self,
        author_id: i32,
        name: &str,
    ) -> Result<RecipeModel, TestError> {
        Ok(
            entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
                author_id: ActiveValue::Set(author_id),
                name: ActiveValue::Set(name.to_string()),
                image: ActiveValue::Set(None),
                text: ActiveValue::Set(format!("How to cook {name}")),
                cooking_time: ActiveValue::Set(10),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a recipe together with its ingredient amounts.
    ///
    /// # Arguments
    /// - `author_id` - Record id of the author
    /// - `name` - Recipe name
    /// - `ingredients` - `(ingredient_id, amount)` pairs to associate with the recipe
    pub async fn insert_mock_recipe(
        &self,
        author_id: i32,
        name: &str,
        ingredients: &[(i32, i64)],
    ) -> Result<RecipeModel, TestError> {
        let recipe = self.insert_recipe(author_id, name).await?;

        if !ingredients.is_empty() {
            let associations = ingredients.iter().map(|(ingredient_id, amount)| {
                entity::recipe_ingredient::ActiveModel {
                    recipe_id: ActiveValue::Set(recipe.id),
                    ingredient_id: ActiveValue::Set(*ingredient_id),
                    amount: ActiveValue::Set(Decimal::from(*amount)),
                }
            });

            entity::prelude::RecipeIngredient::insert_many(associations)
                .exec(&self.setup.db)
                .await?;
        }

        Ok(recipe)
    }

    pub async fn insert_favorite(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recipe_id: ActiveValue::Set(recipe_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_cart_entry(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<entity::shopping_cart::Model, TestError> {
        Ok(
            entity::prelude::ShoppingCart::insert(entity::shopping_cart::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recipe_id: ActiveValue::Set(recipe_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
