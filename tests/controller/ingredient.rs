use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use foodgram::{
    model::ingredient::{IngredientDto, IngredientSearchParams},
    server::controller::ingredient::{get_ingredient, list_ingredients},
};

use super::*;

#[tokio::test]
/// Expect 200 success with ingredients matching the name prefix
async fn lists_ingredients_by_prefix() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .with_ingredient("milk", "ml")
        .with_ingredient("Milk chocolate", "g")
        .with_ingredient("salt", "g")
        .build()
        .await?;

    let result = list_ingredients(
        State(test.into_app_state()),
        Query(IngredientSearchParams {
            name: Some("mil".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let ingredients: Vec<IngredientDto> = body_json(resp).await;
    assert_eq!(ingredients.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an ingredient that does not exist
async fn returns_not_found_for_unknown_ingredient() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = get_ingredient(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_ingredient(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
