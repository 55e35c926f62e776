use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::db::{IngredientModel, RecipeIngredientModel};

pub struct RecipeIngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeIngredientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Deletes every ingredient amount of a recipe, returning the number of rows removed
    pub async fn delete_by_recipe(&self, recipe_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn insert_many(
        &self,
        recipe_id: i32,
        ingredients: &[(i32, Decimal)], // (ingredient_id, amount)
    ) -> Result<(), DbErr> {
        if ingredients.is_empty() {
            return Ok(());
        }

        let models = ingredients.iter().map(|(ingredient_id, amount)| {
            entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                ingredient_id: ActiveValue::Set(*ingredient_id),
                amount: ActiveValue::Set(*amount),
            }
        });

        entity::prelude::RecipeIngredient::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Returns the ingredient amounts of the provided recipes with their catalog entries
    ///
    /// Rows are ordered by recipe, then by ingredient name.
    pub async fn get_by_recipe_ids(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(RecipeIngredientModel, Option<IngredientModel>)>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeIngredient::find()
            .find_also_related(entity::prelude::Ingredient)
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .order_by_asc(entity::recipe_ingredient::Column::RecipeId)
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await
    }

    /// Returns `(name, measurement_unit, amount)` for every ingredient of the provided recipes
    ///
    /// One row per recipe and ingredient pair, amounts are not summed.
    pub async fn get_amounts_for_recipes(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<(String, String, Decimal)>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeIngredient::find()
            .select_only()
            .column(entity::ingredient::Column::Name)
            .column(entity::ingredient::Column::MeasurementUnit)
            .column(entity::recipe_ingredient::Column::Amount)
            .join(
                JoinType::InnerJoin,
                entity::recipe_ingredient::Relation::Ingredient.def(),
            )
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .into_tuple::<(String, String, Decimal)>()
            .all(self.db)
            .await
    }
}
