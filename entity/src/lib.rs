//! SeaORM entity definitions for the Foodgram database schema.

pub mod prelude;

pub mod favorite;
pub mod follow;
pub mod foodgram_user;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod shopping_cart;
