//! User fixture utilities.
//!
//! This module provides methods for creating FoodgramUser records and follow
//! relations, and factory functions for creating in-memory model instances.

pub mod data;
pub mod factory;
