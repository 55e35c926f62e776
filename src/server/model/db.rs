//! Database model type aliases.
//!
//! This module provides type aliases for SeaORM database entity models used throughout the
//! application, so signatures don't need to reach into the `entity` crate directly.

/// Type alias for Foodgram user database model.
///
/// # Fields (from `entity::foodgram_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Login email, unique
/// - `username` - Public handle, unique
/// - `first_name` / `last_name` - Display names
/// - `password_hash` - PBKDF2 hash in `pbkdf2_sha256$<iterations>$<salt>$<hash>` format
/// - `avatar` - Optional avatar reference
/// - `created_at` - Timestamp when the account was registered
pub type UserModel = entity::foodgram_user::Model;

/// Type alias for ingredient catalog database model.
///
/// Ingredients are identified by their unique (name, measurement_unit) pair.
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for recipe database model.
pub type RecipeModel = entity::recipe::Model;

/// Type alias for recipe ingredient association database model.
///
/// One row per (recipe, ingredient) pair holding the amount used by the recipe.
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;
