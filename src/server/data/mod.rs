//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are thin wrappers over a `ConnectionTrait` so the same code runs on a
//! plain connection or inside a transaction.

pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod relation;
pub mod user;
