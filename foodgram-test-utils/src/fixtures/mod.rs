//! Test fixture modules for database record creation.
//!
//! Each submodule provides fixtures for one area of the schema:
//!
//! - `user` - Foodgram users and follow relations
//! - `recipe` - Ingredient catalog, recipes, favorites and cart entries

pub mod recipe;
pub mod user;
