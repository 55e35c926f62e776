use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::user::UserDto;

/// Ingredient of a recipe with the amount used
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientDto {
    /// Ingredient catalog ID
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: Decimal,
}

/// Ingredient entry of a recipe write request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAmountDto {
    /// Ingredient catalog ID
    pub id: i32,
    /// Positive whole amount in the ingredient's measurement unit
    pub amount: i64,
}

/// Payload for creating or updating a recipe
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeWriteDto {
    pub name: String,
    pub text: String,
    /// Cooking time in minutes
    pub cooking_time: i32,
    /// Image reference, keeps the current image on update when omitted
    pub image: Option<String>,
    pub ingredients: Vec<IngredientAmountDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub author: UserDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: Option<String>,
    pub text: String,
    pub cooking_time: i32,
}

/// Short recipe summary used by favorites, shopping cart and subscriptions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeMinifiedDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ShortLinkDto {
    #[serde(rename = "short-link")]
    pub short_link: String,
}

/// Filters for the recipe list
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeFilterParams {
    /// Only recipes published by this author
    pub author: Option<i32>,
    /// `1` to only list recipes favorited by the viewer
    pub is_favorited: Option<u8>,
    /// `1` to only list recipes in the viewer's shopping cart
    pub is_in_shopping_cart: Option<u8>,
}
