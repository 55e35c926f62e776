//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response status codes, session handling and response
//! bodies for the API endpoints.

mod auth;
mod ingredient;
mod recipe;
mod user;

use foodgram_test_utils::prelude::*;

use crate::util::{body_json, body_text, TestContextExt, TEST_PUBLIC_URL};
