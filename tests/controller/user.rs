use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodgram::{
    model::{
        api::{PageParams, PaginatedDto},
        user::{RecipesLimitParams, SetPasswordDto, UserDto, UserWithRecipesDto},
    },
    server::{
        controller::user::{
            get_current_user, get_subscriptions, get_user, set_password, subscribe, unsubscribe,
        },
        model::session::user::SessionUserId,
    },
};

use super::*;

#[tokio::test]
/// Expect 401 unauthorized when requesting the current user without a session
async fn current_user_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_current_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with the logged in user
async fn returns_current_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = get_current_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.id, alice.id);

    Ok(())
}

#[tokio::test]
/// Expect 401 and a cleared session when the session user no longer exists
async fn clears_session_of_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_current_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a profile that does not exist
async fn profile_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_user(State(test.into_app_state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content on password change and the new password to verify
async fn changes_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = test.into_app_state();
    let alice = test
        .user()
        .insert_user("alice", &state.hasher.hash(TEST_PASSWORD))
        .await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = set_password(
        State(state.clone()),
        test.session.clone(),
        Json(SetPasswordDto {
            current_password: TEST_PASSWORD.to_string(),
            new_password: "a much longer secret".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 201 created on subscribe and 400 bad request on the repeated request
async fn subscribes_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let bob = test.user().insert_mock_user("bob").await?;
    test.recipe().insert_recipe(bob.id, "Toast").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();
    let state = test.into_app_state();

    let first = subscribe(
        State(state.clone()),
        test.session.clone(),
        Path(bob.id),
        Query(RecipesLimitParams::default()),
    )
    .await;

    assert!(first.is_ok());
    let resp = first.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let author: UserWithRecipesDto = body_json(resp).await;
    assert!(author.user.is_subscribed);
    assert_eq!(author.recipes_count, 1);

    let second = subscribe(
        State(state),
        test.session.clone(),
        Path(bob.id),
        Query(RecipesLimitParams::default()),
    )
    .await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when subscribing to yourself
async fn rejects_self_subscription() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = subscribe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(alice.id),
        Query(RecipesLimitParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content on unsubscribe and 400 bad request when not subscribed
async fn unsubscribes_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let bob = test.user().insert_mock_user("bob").await?;
    test.user().insert_follow(alice.id, bob.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();
    let state = test.into_app_state();

    let first = unsubscribe(State(state.clone()), test.session.clone(), Path(bob.id)).await;

    assert!(first.is_ok());
    let resp = first.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let second = unsubscribe(State(state), test.session.clone(), Path(bob.id)).await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with followed authors only
async fn lists_subscriptions() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_mock_user("alice").await?;
    let bob = test.user().insert_mock_user("bob").await?;
    test.user().insert_mock_user("carol").await?;
    test.user().insert_follow(alice.id, bob.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = get_subscriptions(
        State(test.into_app_state()),
        test.session.clone(),
        Query(PageParams::default()),
        Query(RecipesLimitParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PaginatedDto<UserWithRecipesDto> = body_json(resp).await;
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].user.id, bob.id);

    Ok(())
}
