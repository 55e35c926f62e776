use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, LoginDto, UserDto},
    },
    server::{
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::{auth::AuthService, user::user_dto},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new user account
///
/// # Responses
/// - 201 (Created): The registered user
/// - 400 (Bad Request): Invalid registration data, or the email or username is taken
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/api/users",
    tag = AUTH_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(registration): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.hasher)
        .register(registration)
        .await?;

    Ok((StatusCode::CREATED, Json(user_dto(user, false))))
}

/// Log in with email and password
///
/// Stores the user ID in a freshly cycled session.
///
/// # Responses
/// - 200 (OK): Logged in, returns the user
/// - 401 (Unauthorized): Email and password don't match a user
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.hasher)
        .login(credentials)
        .await?;

    SessionUserId::login(&session, user.id).await?;

    tracing::debug!("User ID {} logged in", user.id);

    Ok(Json(user_dto(user, false)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 204 (No Content): Logged out, or there was no user in session
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session without data errors in the store, only clear when logged in
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}
