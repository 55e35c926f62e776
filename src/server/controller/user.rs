use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageParams, PaginatedDto},
        user::{AvatarDto, RecipesLimitParams, SetPasswordDto, UserDto, UserWithRecipesDto},
    },
    server::{
        controller::util::get_user::{require_user, viewer_id},
        error::Error,
        model::app::AppState,
        service::{
            follow::FollowService,
            user::{user_dto, UserService},
        },
        util::pagination::Page,
    },
};

pub static USER_TAG: &str = "user";

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    Ok(Json(user_dto(user, false)))
}

/// Get a user's profile
///
/// `is_subscribed` tells whether the logged in user follows this user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer_id = viewer_id(&session).await?;

    let user = UserService::new(&state.db)
        .get_profile(viewer_id, user_id)
        .await?;

    Ok(Json(user))
}

/// Change the logged in user's password
#[utoipa::path(
    post,
    path = "/api/users/set_password",
    tag = USER_TAG,
    request_body = SetPasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Wrong current password or invalid new password", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_password(
    State(state): State<AppState>,
    session: Session,
    Json(passwords): Json<SetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    UserService::new(&state.db)
        .set_password(&state.hasher, user.id, passwords)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/users/me/avatar",
    tag = USER_TAG,
    request_body = AvatarDto,
    responses(
        (status = 200, description = "Avatar stored", body = AvatarDto),
        (status = 400, description = "Empty avatar", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_avatar(
    State(state): State<AppState>,
    session: Session,
    Json(avatar): Json<AvatarDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    let avatar = UserService::new(&state.db)
        .set_avatar(user.id, avatar)
        .await?;

    Ok(Json(avatar))
}

#[utoipa::path(
    delete,
    path = "/api/users/me/avatar",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Avatar removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_avatar(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    UserService::new(&state.db).delete_avatar(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the authors the logged in user follows
///
/// Each author comes with their recipe count and up to `recipes_limit` of their newest
/// recipes.
#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = USER_TAG,
    params(PageParams, RecipesLimitParams),
    responses(
        (status = 200, description = "Followed authors", body = PaginatedDto<UserWithRecipesDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(page): Query<PageParams>,
    Query(limit): Query<RecipesLimitParams>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    let subscriptions = FollowService::new(&state.db)
        .subscriptions(user.id, Page::from(page), limit.recipes_limit)
        .await?;

    Ok(Json(subscriptions))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Author ID"), RecipesLimitParams),
    responses(
        (status = 201, description = "Author followed", body = UserWithRecipesDto),
        (status = 400, description = "Already following or following oneself", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
    Query(limit): Query<RecipesLimitParams>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    let author = FollowService::new(&state.db)
        .subscribe(user.id, author_id, limit.recipes_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(author)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author unfollowed"),
        (status = 400, description = "Not following the author", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&state, &session).await?;

    FollowService::new(&state.db)
        .unsubscribe(user.id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
