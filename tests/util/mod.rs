//! Test utilities for building AppState from a test context and reading response bodies

use axum::{body::to_bytes, response::Response};
use foodgram::server::{model::app::AppState, util::password::PasswordHasher};
use foodgram_test_utils::TestContext;
use serde::de::DeserializeOwned;

pub static TEST_PUBLIC_URL: &str = "http://localhost:8080";

/// Extension trait for TestContext to create AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            // Low iteration count keeps hashing fast in tests
            hasher: PasswordHasher::new(10),
            public_url: TEST_PUBLIC_URL.to_string(),
        }
    }
}

pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}
