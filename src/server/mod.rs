//! Server application core modules.
//!
//! This module contains all server-side functionality of the Foodgram backend: HTTP routing,
//! session authentication, database access, and the recipe, relation toggle and shopping list
//! services built on top of it.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
