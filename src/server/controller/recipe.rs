use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageParams, PaginatedDto},
        recipe::{RecipeDto, RecipeFilterParams, RecipeMinifiedDto, RecipeWriteDto, ShortLinkDto},
    },
    server::{
        controller::util::get_user::{require_user, viewer_id},
        error::Error,
        model::app::AppState,
        service::{recipe::RecipeService, shopping_list::ShoppingListService},
        util::{
            pagination::Page,
            report::{render_shopping_list, shopping_list_filename},
        },
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// List recipes, newest first
///
/// `is_favorited=1` and `is_in_shopping_cart=1` restrict the list to the logged in user's
/// favorites or cart and are ignored for anonymous requests.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(PageParams, RecipeFilterParams),
    responses(
        (status = 200, description = "One page of recipes", body = PaginatedDto<RecipeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
    Query(page): Query<PageParams>,
    Query(filter): Query<RecipeFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let viewer_id = viewer_id(&session).await?;

    let recipes = RecipeService::new(&state.db)
        .list(viewer_id, filter, Page::from(page))
        .await?;

    Ok(Json(recipes))
}

/// Publish a recipe
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    request_body = RecipeWriteDto,
    responses(
        (status = 201, description = "Recipe published", body = RecipeDto),
        (status = 400, description = "Invalid recipe or ingredient list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    session: Session,
    Json(recipe): Json<RecipeWriteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    let recipe = RecipeService::new(&state.db).create(user.id, recipe).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "The recipe", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer_id = viewer_id(&session).await?;

    let recipe = RecipeService::new(&state.db)
        .get(viewer_id, recipe_id)
        .await?;

    Ok(Json(recipe))
}

/// Overwrite a recipe and its full ingredient list
///
/// Omitting `image` keeps the current image. Only the author may update a recipe.
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = RecipeWriteDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Invalid recipe or ingredient list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
    Json(recipe): Json<RecipeWriteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .update(user.id, recipe_id, recipe)
        .await?;

    Ok(Json(recipe))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    RecipeService::new(&state.db)
        .delete(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/get-link",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Short link to the recipe", body = ShortLinkDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_short_link(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let link = RecipeService::new(&state.db)
        .short_link(recipe_id, &state.public_url)
        .await?;

    Ok(Json(link))
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to favorites", body = RecipeMinifiedDto),
        (status = 400, description = "Recipe already in favorites", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .add_favorite(user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from favorites"),
        (status = 400, description = "Recipe not in favorites", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    RecipeService::new(&state.db)
        .remove_favorite(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to the shopping cart", body = RecipeMinifiedDto),
        (status = 400, description = "Recipe already in the shopping cart", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .add_to_cart(user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from the shopping cart"),
        (status = 400, description = "Recipe not in the shopping cart", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_shopping_cart(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    RecipeService::new(&state.db)
        .remove_from_cart(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download the shopping list of the logged in user's cart
///
/// Ingredients of every recipe in the cart are summed per ingredient and listed by name,
/// followed by the recipes themselves.
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "Shopping list attachment", body = String, content_type = "text/plain"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    let shopping_list = ShoppingListService::new(&state.db)
        .shopping_list(user.id)
        .await?;

    let created_at = Utc::now().naive_utc();
    let document = render_shopping_list(
        &user.username,
        created_at,
        &shopping_list.items,
        &shopping_list.recipes,
    );

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    shopping_list_filename(created_at)
                ),
            ),
        ],
        document,
    ))
}
