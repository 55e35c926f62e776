use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ingredient::{IngredientDto, IngredientSearchParams},
    },
    server::{error::Error, model::app::AppState, service::ingredient::IngredientService},
};

pub static INGREDIENT_TAG: &str = "ingredient";

/// List the ingredient catalog
///
/// Optionally filtered by a case-insensitive prefix of the name, sorted by name.
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    params(IngredientSearchParams),
    responses(
        (status = 200, description = "Matching ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    Query(params): Query<IngredientSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let ingredients = IngredientService::new(&state.db)
        .list(params.name.as_deref())
        .await?;

    Ok(Json(ingredients))
}

#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "The ingredient", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let ingredient = IngredientService::new(&state.db).get(ingredient_id).await?;

    Ok(Json(ingredient))
}
