//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main foodgram crate to keep fixture signatures
//! consistent across tests.

/// Type alias for Foodgram user database model.
pub type UserModel = entity::foodgram_user::Model;

/// Type alias for ingredient catalog database model.
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for recipe database model.
pub type RecipeModel = entity::recipe::Model;

/// Type alias for recipe ingredient association database model.
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;
