//! Calendly API client for looking up the account and listing its event
//! types and scheduled events. Responses are passed through as opaque
//! JSON so the front end sees exactly what Calendly returned.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum CalendlyError {
    /// Calendly answered with a non-2xx status. The body is kept for
    /// server-side logging only and is never relayed to the caller.
    #[error("Calendly responded with HTTP {status}")]
    Status { status: u16, body: String },

    /// Connection failure or timeout before a response was received.
    #[error("request to Calendly failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fetch the account behind the configured token (`GET /users/me`).
pub async fn current_user(api_base: &str, token: &str) -> Result<Value, CalendlyError> {
    let url = format!("{}/users/me", api_base.trim_end_matches('/'));
    get_json(&url, &[], token).await
}

/// List event types owned by `user_uri` (`GET /event_types?user=...`).
pub async fn event_types(
    api_base: &str,
    token: &str,
    user_uri: &str,
) -> Result<Value, CalendlyError> {
    let url = format!("{}/event_types", api_base.trim_end_matches('/'));
    get_json(&url, &[("user", user_uri)], token).await
}

/// List scheduled events for `user_uri` (`GET /scheduled_events?user=...`).
pub async fn scheduled_events(
    api_base: &str,
    token: &str,
    user_uri: &str,
) -> Result<Value, CalendlyError> {
    let url = format!("{}/scheduled_events", api_base.trim_end_matches('/'));
    get_json(&url, &[("user", user_uri)], token).await
}

async fn get_json(
    url: &str,
    query: &[(&str, &str)],
    token: &str,
) -> Result<Value, CalendlyError> {
    let response = reqwest::Client::new()
        .get(url)
        .query(query)
        .bearer_auth(token)
        .header("Content-Type", "application/json")
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CalendlyError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json().await?)
}
