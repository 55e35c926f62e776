//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using tower-sessions
//! (Redis-backed in production, memory-backed in tests).

pub mod user;
