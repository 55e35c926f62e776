//! Data transfer objects shared by the HTTP API.

pub mod api;
pub mod ingredient;
pub mod recipe;
pub mod user;
