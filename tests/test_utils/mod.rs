//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};

use backstage::api::AppState;
use backstage::api::app;
use backstage::core::AppConfig;

/// Creates a test application router pointed at a fake Calendly base
/// URL (usually a mockito server). Pass `None` for the secret to
/// exercise the missing-credential path.
pub fn test_app(calendly_api_base: &str, calendly_client_secret: Option<&str>) -> Router {
    let app_config = AppConfig {
        calendly_api_base: calendly_api_base.to_string(),
        calendly_client_secret: calendly_client_secret.map(String::from),
        site_path: String::from("./dist"),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(app_state))
}

/// Collect a response body into a string.
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}
