//! Factory functions for generating mock ingredient and recipe models.

use chrono::Utc;

use crate::model::{IngredientModel, RecipeModel};

/// Create a mock ingredient database model for testing.
pub fn mock_ingredient_model(id: i32, name: &str, measurement_unit: &str) -> IngredientModel {
    IngredientModel {
        id,
        name: name.to_string(),
        measurement_unit: measurement_unit.to_string(),
    }
}

/// Create a mock recipe database model for testing.
///
/// # Arguments
/// - `id` - Record id of the recipe
/// - `author_id` - Record id of the author
/// - `name` - Recipe name
pub fn mock_recipe_model(id: i32, author_id: i32, name: &str) -> RecipeModel {
    RecipeModel {
        id,
        author_id,
        name: name.to_string(),
        image: None,
        text: format!("How to cook {name}"),
        cooking_time: 10,
        created_at: Utc::now().naive_utc(),
    }
}
