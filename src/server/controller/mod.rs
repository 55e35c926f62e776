//! HTTP controller endpoints for the Foodgram web API.
//!
//! This module contains Axum handlers for authentication, user profiles and subscriptions,
//! the ingredient catalog and recipes. Controllers resolve the session user, call services
//! and map results to HTTP responses. They integrate with tower-sessions for session
//! management and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod user;
pub mod util;
