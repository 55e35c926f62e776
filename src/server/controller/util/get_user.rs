use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
};

/// Retrieves the user ID from session and then the user from the database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserModel)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not in
///   the database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn require_user(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserRepository::new(&state.db).get_by_id(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Returns the user ID in session, `None` for anonymous viewers
pub async fn viewer_id(session: &Session) -> Result<Option<i32>, Error> {
    SessionUserId::get(session).await
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use foodgram_test_utils::prelude::*;

    use crate::server::{
        controller::util::get_user::require_user,
        model::{app::AppState, session::user::SessionUserId},
        util::password::PasswordHasher,
    };

    fn app_state(test: &TestContext) -> AppState {
        AppState {
            db: test.db.clone(),
            hasher: PasswordHasher::new(10),
            public_url: "http://localhost:8080".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_session_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;
        let alice = test.user().insert_mock_user("alice").await?;
        SessionUserId::insert(&test.session, alice.id).await.unwrap();

        let result = require_user(&app_state(&test), &test.session).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, alice.id);

        Ok(())
    }

    /// Expect 401 when nobody is logged in
    #[tokio::test]
    async fn fails_for_anonymous_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;

        let result = require_user(&app_state(&test), &test.session).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect the session to be cleared when its user no longer exists
    #[tokio::test]
    async fn clears_session_of_deleted_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = require_user(&app_state(&test), &test.session).await;

        assert!(result.is_err());
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}
