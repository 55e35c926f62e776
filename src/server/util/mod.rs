//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers used across services and controllers: password
//! hashing, pagination arithmetic and rendering of the shopping list document.

pub mod pagination;
pub mod password;
pub mod report;
