use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use foodgram::{
    model::{
        api::{PageParams, PaginatedDto},
        recipe::{
            IngredientAmountDto, RecipeDto, RecipeFilterParams, RecipeWriteDto, ShortLinkDto,
        },
    },
    server::{
        controller::recipe::{
            add_favorite, add_to_shopping_cart, create_recipe, delete_recipe,
            download_shopping_cart, get_recipe, get_short_link, list_recipes, remove_favorite,
            update_recipe,
        },
        model::session::user::SessionUserId,
    },
};

use super::*;

fn write_dto(name: &str, ingredients: &[(i32, i64)]) -> RecipeWriteDto {
    RecipeWriteDto {
        name: name.to_string(),
        text: "Mix everything".to_string(),
        cooking_time: 10,
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

#[tokio::test]
/// Expect 201 created with the recipe and its ingredients
async fn creates_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let bread = test.recipe().insert_ingredient("bread", "g").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = create_recipe(
        State(test.into_app_state()),
        test.session.clone(),
        Json(write_dto("Toast", &[(bread.id, 60)])),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let recipe: RecipeDto = body_json(resp).await;
    assert_eq!(recipe.name, "Toast");
    assert_eq!(recipe.author.id, alice.id);
    assert_eq!(recipe.ingredients.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when creating a recipe without logging in
async fn create_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let bread = test.recipe().insert_ingredient("bread", "g").await?;

    let result = create_recipe(
        State(test.into_app_state()),
        test.session.clone(),
        Json(write_dto("Toast", &[(bread.id, 60)])),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an unknown ingredient
async fn create_rejects_unknown_ingredient() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = create_recipe(
        State(test.into_app_state()),
        test.session.clone(),
        Json(write_dto("Toast", &[(1, 60)])),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 403 forbidden when someone other than the author updates or deletes a recipe
async fn only_author_may_modify() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let bob = test.user().insert_mock_user("bob").await?;
    let bread = test.recipe().insert_ingredient("bread", "g").await?;
    let toast = test
        .recipe()
        .insert_mock_recipe(alice.id, "Toast", &[(bread.id, 60)])
        .await?;
    SessionUserId::insert(&test.session, bob.id).await.unwrap();
    let state = test.into_app_state();

    let update = update_recipe(
        State(state.clone()),
        test.session.clone(),
        Path(toast.id),
        Json(write_dto("Stolen", &[(bread.id, 1)])),
    )
    .await;

    assert!(update.is_err());
    let resp = update.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let delete = delete_recipe(State(state), test.session.clone(), Path(toast.id)).await;

    assert!(delete.is_err());
    let resp = delete.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content when the author deletes the recipe and 404 afterwards
async fn author_deletes_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let toast = test.recipe().insert_recipe(alice.id, "Toast").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();
    let state = test.into_app_state();

    let result = delete_recipe(State(state.clone()), test.session.clone(), Path(toast.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let result = get_recipe(State(state), test.session.clone(), Path(toast.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with relation flags false for an anonymous viewer
async fn lists_recipes_for_anonymous_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let toast = test.recipe().insert_recipe(alice.id, "Toast").await?;
    test.recipe().insert_favorite(alice.id, toast.id).await?;

    let result = list_recipes(
        State(test.into_app_state()),
        test.session.clone(),
        Query(PageParams::default()),
        Query(RecipeFilterParams {
            is_favorited: Some(1),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PaginatedDto<RecipeDto> = body_json(resp).await;
    assert_eq!(page.count, 1);
    assert!(!page.results[0].is_favorited);

    Ok(())
}

#[tokio::test]
/// Expect the short link to point at the recipe page
async fn returns_short_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let toast = test.recipe().insert_recipe(alice.id, "Toast").await?;

    let result = get_short_link(State(test.into_app_state()), Path(toast.id)).await;

    assert!(result.is_ok());
    let link: ShortLinkDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(link.short_link, format!("{TEST_PUBLIC_URL}/recipes/{}", toast.id));

    Ok(())
}

#[tokio::test]
/// Expect 201 created on the first favorite and 400 bad request on the second
async fn favorites_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let toast = test.recipe().insert_recipe(alice.id, "Toast").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();
    let state = test.into_app_state();

    let first = add_favorite(State(state.clone()), test.session.clone(), Path(toast.id)).await;

    assert!(first.is_ok());
    let resp = first.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let second = add_favorite(State(state), test.session.clone(), Path(toast.id)).await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when favoriting a recipe that does not exist
async fn favorite_unknown_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = add_favorite(State(test.into_app_state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when removing a favorite that was never added
async fn remove_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let toast = test.recipe().insert_recipe(alice.id, "Toast").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = remove_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(toast.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect the downloaded list to sum ingredients shared by the recipes in the cart
async fn downloads_shopping_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let bread = test.recipe().insert_ingredient("bread", "g").await?;
    let toast = test
        .recipe()
        .insert_mock_recipe(alice.id, "Toast", &[(bread.id, 60)])
        .await?;
    let sandwich = test
        .recipe()
        .insert_mock_recipe(alice.id, "Sandwich", &[(bread.id, 40)])
        .await?;
    test.recipe().insert_cart_entry(alice.id, toast.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();
    let state = test.into_app_state();

    let added =
        add_to_shopping_cart(State(state.clone()), test.session.clone(), Path(sandwich.id)).await;
    assert!(added.is_ok());

    let result = download_shopping_cart(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"shopping_list_"));

    let body = body_text(resp).await;
    assert!(body.contains("=== INGREDIENTS ==="));
    assert!(body.contains("1. Bread (g) - 100"));
    assert!(body.contains("* Sandwich (author: alice)"));
    assert!(body.contains("* Toast (author: alice)"));

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when downloading without logging in
async fn download_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = download_shopping_cart(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
