use foodgram_test_utils::prelude::*;

use crate::model::recipe::{IngredientAmountDto, RecipeWriteDto};

mod toggle;
mod update;

fn write_dto(name: &str, ingredients: &[(i32, i64)]) -> RecipeWriteDto {
    RecipeWriteDto {
        name: name.to_string(),
        text: format!("How to cook {name}"),
        cooking_time: 15,
        image: None,
        ingredients: ingredients
            .iter()
            .map(|(id, amount)| IngredientAmountDto {
                id: *id,
                amount: *amount,
            })
            .collect(),
    }
}
