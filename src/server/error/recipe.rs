use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised while reading or writing recipes and their ingredient lists.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe name must be between 1 and {max} characters long")]
    InvalidName { max: usize },
    #[error("Recipe text must not be empty")]
    EmptyText,
    #[error("Cooking time must be at least 1 minute, got {0}")]
    InvalidCookingTime(i32),
    #[error("Recipe must contain at least one ingredient")]
    EmptyIngredients,
    #[error("Ingredient ID {0} is listed more than once")]
    DuplicateIngredient(i32),
    #[error("Ingredient ID {0} does not exist")]
    UnknownIngredient(i32),
    #[error("Amount {amount} of ingredient ID {ingredient_id} must be between 1 and {max}")]
    InvalidAmount {
        ingredient_id: i32,
        amount: i64,
        max: i64,
    },
    #[error("Recipe ID {0} not found")]
    RecipeNotFound(i32),
    #[error("Ingredient ID {0} not found")]
    IngredientNotFound(i32),
    #[error("User ID {user_id} is not the author of recipe ID {recipe_id}")]
    NotAuthor { user_id: i32, recipe_id: i32 },
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::RecipeNotFound(_) => error_response(StatusCode::NOT_FOUND, "Recipe not found"),
            Self::IngredientNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Ingredient not found")
            }
            Self::NotAuthor { .. } => error_response(
                StatusCode::FORBIDDEN,
                "Only the author may change this recipe",
            ),
            err => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        }
    }
}
