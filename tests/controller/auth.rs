use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use foodgram::{
    model::user::{CreateUserDto, LoginDto, UserDto},
    server::{
        controller::auth::{login, logout, register},
        model::session::user::SessionUserId,
    },
};

use super::*;

fn registration(username: &str) -> CreateUserDto {
    CreateUserDto {
        email: format!("{username}@example.com"),
        username: username.to_string(),
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
/// Expect 201 created with the registered user
async fn register_returns_created_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(State(test.into_app_state()), Json(registration("alice"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.username, "alice");
    assert!(!user.is_subscribed);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when the username is taken
async fn register_rejects_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user("alice")
        .build()
        .await?;

    let mut duplicate = registration("alice");
    duplicate.email = "other@example.com".to_string();
    let result = register(State(test.into_app_state()), Json(duplicate)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 success and the user ID in session after login
async fn login_stores_user_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = test.into_app_state();
    let user = test
        .user()
        .insert_user("alice", &state.hasher.hash(TEST_PASSWORD))
        .await?;

    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "alice@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(user.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized and no session user for a wrong password
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = test.into_app_state();
    test.user()
        .insert_user("alice", &state.hasher.hash(TEST_PASSWORD))
        .await?;

    let result = login(
        State(state),
        test.session.clone(),
        Json(LoginDto {
            email: "alice@example.com".to_string(),
            password: "not the password".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 no content after logout and the user cleared from session
async fn logout_clears_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 no content after logout even without session data
async fn logout_without_session_succeeds() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
