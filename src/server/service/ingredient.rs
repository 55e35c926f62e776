//! Ingredient catalog lookups and bulk import.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::ingredient::IngredientDto,
    server::{
        data::ingredient::IngredientRepository,
        error::{recipe::RecipeError, Error},
        model::db::IngredientModel,
    },
};

/// Catalog entry as read from an import file
#[derive(Clone, Debug, Deserialize)]
pub struct IngredientImportEntry {
    pub name: String,
    #[serde(alias = "unit")]
    pub measurement_unit: String,
}

/// Outcome of a catalog import
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: u64,
    /// Entries which were blank, repeated in the input or already in the catalog
    pub skipped: u64,
}

fn ingredient_dto(ingredient: IngredientModel) -> IngredientDto {
    IngredientDto {
        id: ingredient.id,
        name: ingredient.name,
        measurement_unit: ingredient.measurement_unit,
    }
}

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the catalog sorted by name, optionally filtered by a case-insensitive name prefix
    pub async fn list(&self, name_prefix: Option<&str>) -> Result<Vec<IngredientDto>, Error> {
        let prefix = name_prefix.map(str::trim);

        let ingredients = IngredientRepository::new(self.db).search(prefix).await?;

        Ok(ingredients.into_iter().map(ingredient_dto).collect())
    }

    pub async fn get(&self, ingredient_id: i32) -> Result<IngredientDto, Error> {
        let ingredient = IngredientRepository::new(self.db)
            .get_by_id(ingredient_id)
            .await?
            .ok_or(RecipeError::IngredientNotFound(ingredient_id))?;

        Ok(ingredient_dto(ingredient))
    }

    /// Adds catalog entries which are not present yet
    ///
    /// Names and units are trimmed, entries with a blank name or unit are skipped.
    pub async fn import(&self, entries: Vec<IngredientImportEntry>) -> Result<ImportSummary, Error> {
        let total = entries.len() as u64;

        let mut seen = HashSet::new();
        let pairs: Vec<(String, String)> = entries
            .into_iter()
            .map(|entry| {
                (
                    entry.name.trim().to_string(),
                    entry.measurement_unit.trim().to_string(),
                )
            })
            .filter(|(name, unit)| !name.is_empty() && !unit.is_empty())
            .filter(|pair| seen.insert(pair.clone()))
            .collect();

        let added = IngredientRepository::new(self.db)
            .insert_many_ignoring_existing(pairs)
            .await?;

        Ok(ImportSummary {
            added,
            skipped: total - added,
        })
    }
}
