//! Utility functions for controller request handling.
//!
//! Session user lookups shared by protected and viewer-aware endpoints.

pub mod get_user;
