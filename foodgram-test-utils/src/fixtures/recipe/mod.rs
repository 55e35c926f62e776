//! Recipe fixture utilities.
//!
//! Database fixtures for ingredients, recipes with their ingredient amounts, and the
//! favorite and shopping cart relations, plus in-memory factories.

pub mod data;
pub mod factory;
