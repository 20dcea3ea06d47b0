//! Test utilities for integration testing (available with `test-utils` feature).

use axum_test::TestServer;
use serde_json::{Value, json};

use crate::config::{Config, DatabaseConfig};

/// Configuration backed by the in-memory store, with docs enabled.
pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database: DatabaseConfig::Memory,
        enable_otel_export: false,
        enable_docs: true,
    }
}

/// A test server over a fresh, empty in-memory store.
pub async fn create_test_app() -> TestServer {
    crate::Application::new(create_test_config())
        .await
        .expect("Failed to create application")
        .into_test_server()
}

/// A registration body that passes every field constraint.
pub fn valid_submission(email: &str) -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "department": "Engineering",
        "salary": 125000.5,
        "email": email,
        "phone": "0123456789",
        "location": "London"
    })
}
