//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so they end up on one method router.
///
/// # Registered Endpoints
/// - `POST /api/users` - Register
/// - `POST /api/auth/login`, `POST /api/auth/logout` - Session login and logout
/// - `GET /api/users/me`, `GET /api/users/{id}` - Profiles
/// - `POST /api/users/set_password`, `PUT|DELETE /api/users/me/avatar` - Account changes
/// - `GET /api/users/subscriptions`, `POST|DELETE /api/users/{id}/subscribe` - Follows
/// - `GET /api/ingredients`, `GET /api/ingredients/{id}` - Ingredient catalog
/// - `GET|POST /api/recipes`, `GET|PATCH|DELETE /api/recipes/{id}` - Recipes
/// - `GET /api/recipes/{id}/get-link` - Recipe short link
/// - `POST|DELETE /api/recipes/{id}/favorite`, `POST|DELETE /api/recipes/{id}/shopping_cart`
/// - `GET /api/recipes/download_shopping_cart` - Shopping list attachment
///
/// # Swagger UI
/// Interactive API documentation is served at `/api/docs` and the OpenAPI specification at
/// `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to receive the state and
/// session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Foodgram", description = "Foodgram API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and session login"),
        (name = controller::user::USER_TAG, description = "User profiles and subscriptions"),
        (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredient catalog"),
        (name = controller::recipe::RECIPE_TAG, description = "Recipes, favorites and shopping cart"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::user::get_current_user))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::set_password))
        .routes(routes!(
            controller::user::set_avatar,
            controller::user::delete_avatar
        ))
        .routes(routes!(controller::user::get_subscriptions))
        .routes(routes!(
            controller::user::subscribe,
            controller::user::unsubscribe
        ))
        .routes(routes!(controller::ingredient::list_ingredients))
        .routes(routes!(controller::ingredient::get_ingredient))
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(controller::recipe::download_shopping_cart))
        .routes(routes!(
            controller::recipe::get_recipe,
            controller::recipe::update_recipe,
            controller::recipe::delete_recipe
        ))
        .routes(routes!(controller::recipe::get_short_link))
        .routes(routes!(
            controller::recipe::add_favorite,
            controller::recipe::remove_favorite
        ))
        .routes(routes!(
            controller::recipe::add_to_shopping_cart,
            controller::recipe::remove_from_shopping_cart
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
