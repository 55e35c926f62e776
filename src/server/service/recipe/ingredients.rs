//! Replace-all writes of a recipe's ingredient list.

use std::collections::HashSet;

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::{
    model::recipe::{IngredientAmountDto, RecipeIngredientDto},
    server::{
        data::{
            ingredient::IngredientRepository, recipe::RecipeRepository,
            recipe_ingredient::RecipeIngredientRepository,
        },
        error::{recipe::RecipeError, Error},
        service::recipe::RecipeService,
    },
};

/// Largest amount of a single ingredient, bounded by the amount column
pub const MAX_AMOUNT: i64 = 99_999;

/// Checks an ingredient list without touching the database
///
/// The list must not be empty, ingredient IDs must not repeat and every amount must be a
/// whole number between 1 and [`MAX_AMOUNT`]. Returns `(ingredient_id, amount)` pairs in
/// input order.
pub fn validate_ingredients(
    entries: &[IngredientAmountDto],
) -> Result<Vec<(i32, Decimal)>, RecipeError> {
    if entries.is_empty() {
        return Err(RecipeError::EmptyIngredients);
    }

    let mut seen = HashSet::with_capacity(entries.len());
    let mut validated = Vec::with_capacity(entries.len());

    for entry in entries {
        if !(1..=MAX_AMOUNT).contains(&entry.amount) {
            return Err(RecipeError::InvalidAmount {
                ingredient_id: entry.id,
                amount: entry.amount,
                max: MAX_AMOUNT,
            });
        }

        if !seen.insert(entry.id) {
            return Err(RecipeError::DuplicateIngredient(entry.id));
        }

        validated.push((entry.id, Decimal::from(entry.amount)));
    }

    Ok(validated)
}

/// Replaces every ingredient amount of a recipe with the validated entries
///
/// Runs on the caller's connection so the replace can share a transaction with other
/// writes to the recipe.
pub(super) async fn replace_ingredients_in<C: ConnectionTrait>(
    db: &C,
    recipe_id: i32,
    entries: &[(i32, Decimal)],
) -> Result<(), Error> {
    if RecipeRepository::new(db).get_by_id(recipe_id).await?.is_none() {
        return Err(RecipeError::RecipeNotFound(recipe_id).into());
    }

    let ingredient_ids: Vec<i32> = entries.iter().map(|(id, _)| *id).collect();
    let existing: HashSet<i32> = IngredientRepository::new(db)
        .get_existing_ids(&ingredient_ids)
        .await?
        .into_iter()
        .collect();

    if let Some(unknown) = ingredient_ids.iter().find(|id| !existing.contains(id)) {
        return Err(RecipeError::UnknownIngredient(*unknown).into());
    }

    let recipe_ingredient_repo = RecipeIngredientRepository::new(db);
    recipe_ingredient_repo.delete_by_recipe(recipe_id).await?;
    recipe_ingredient_repo.insert_many(recipe_id, entries).await?;

    Ok(())
}

impl<'a> RecipeService<'a> {
    /// Replaces the ingredient list of a recipe in its own transaction
    ///
    /// # Returns
    /// - `Ok(())` - The recipe now holds exactly the provided ingredients
    /// - `Err(Error::RecipeError(RecipeError::RecipeNotFound))` - Recipe does not exist
    /// - `Err(Error::RecipeError)` - Empty list, repeated or unknown ingredient, invalid amount
    /// - `Err(Error::DbErr)` - Database operation failed, the previous list is kept
    pub async fn replace_ingredients(
        &self,
        recipe_id: i32,
        entries: &[IngredientAmountDto],
    ) -> Result<(), Error> {
        let entries = validate_ingredients(entries)?;

        let txn = self.db.begin().await?;
        replace_ingredients_in(&txn, recipe_id, &entries).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Reads the ingredient list of a recipe ordered by ingredient name
    pub async fn get_ingredients(&self, recipe_id: i32) -> Result<Vec<RecipeIngredientDto>, Error> {
        Ok(self.get(None, recipe_id).await?.ingredients)
    }
}
