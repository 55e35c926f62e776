use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::recipe::RecipeMinifiedDto;

/// Public profile of a user as seen by the requesting viewer
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the viewer follows this user, always false for anonymous viewers
    pub is_subscribed: bool,
    pub avatar: Option<String>,
}

/// Registration payload
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SetPasswordDto {
    pub current_password: String,
    pub new_password: String,
}

/// Avatar reference, an uploaded image URL or data URI
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AvatarDto {
    pub avatar: String,
}

/// Author followed by the viewer together with a preview of their recipes
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserWithRecipesDto {
    #[serde(flatten)]
    pub user: UserDto,
    /// Newest recipes of the author, limited by `recipes_limit`
    pub recipes: Vec<RecipeMinifiedDto>,
    /// Total number of recipes published by the author
    pub recipes_count: u64,
}

/// Query parameters for subscription endpoints
#[derive(Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipesLimitParams {
    /// Maximum number of recipes shown per author
    pub recipes_limit: Option<u64>,
}
