//! Router for the booking API
//!
//! Proxies the site's scheduling requests to Calendly so the bearer
//! credential never reaches the browser. Upstream 2xx bodies pass
//! through verbatim; everything else becomes a localized JSON error
//! envelope.

use std::sync::Arc;

use axum::body::Bytes;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, extract::State, routing::post};
use http::StatusCode;
use serde_json::Value;

use super::public::{BookingAction, BookingRequest};
use crate::api::public::{ApiError, messages};
use crate::api::state::AppState;
use crate::calendly::{self, CalendlyError};
use crate::core::AppConfig;

type SharedState = Arc<AppState>;

async fn booking_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let (api_base, secret) = {
        let AppConfig {
            calendly_api_base,
            calendly_client_secret,
            ..
        } = &state.config;
        (calendly_api_base.clone(), calendly_client_secret.clone())
    };

    // The credential check comes first: a misconfigured deployment must
    // fail before any upstream call is attempted.
    let Some(secret) = secret else {
        tracing::error!("CALENDLY_CLIENT_SECRET is not set");
        return Err(ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::MISSING_CONFIG,
        ));
    };

    let request: BookingRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!("Rejected booking request body: {}", err);
            return Err(ApiError::new(
                StatusCode::BAD_REQUEST,
                messages::INVALID_REQUEST,
            ));
        }
    };

    tracing::info!("Booking action requested: {:?}", request.action);

    match request.action {
        BookingAction::GetUserInfo => relay(
            calendly::current_user(&api_base, &secret).await,
            messages::USER_INFO_FAILED,
        ),
        BookingAction::GetEventTypes => {
            let user_uri = require_user_uri(&request)?;
            relay(
                calendly::event_types(&api_base, &secret, user_uri).await,
                messages::EVENT_TYPES_FAILED,
            )
        }
        BookingAction::GetScheduledEvents => {
            let user_uri = require_user_uri(&request)?;
            relay(
                calendly::scheduled_events(&api_base, &secret, user_uri).await,
                messages::SCHEDULED_EVENTS_FAILED,
            )
        }
        BookingAction::Unknown => {
            tracing::error!("Unknown booking action requested");
            Err(ApiError::new(
                StatusCode::BAD_REQUEST,
                messages::UNKNOWN_ACTION,
            ))
        }
    }
}

/// Listing event types or scheduled events needs the user URI obtained
/// from a prior `get_user_info` call. Missing or empty values are
/// rejected locally instead of being interpolated into the upstream
/// query string.
fn require_user_uri(request: &BookingRequest) -> Result<&str, ApiError> {
    match request.user_uri.as_deref() {
        Some(user_uri) if !user_uri.is_empty() => Ok(user_uri),
        _ => Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            messages::MISSING_USER_URI,
        )),
    }
}

/// Map the upstream outcome to a response: 2xx bodies pass through
/// verbatim, non-2xx statuses are surfaced with a localized message, and
/// transport failures fall through to the generic 500.
fn relay(result: Result<Value, CalendlyError>, message: &str) -> Result<Response, ApiError> {
    match result {
        Ok(body) => Ok(Json(body).into_response()),
        Err(CalendlyError::Status { status, body }) => {
            tracing::error!("Calendly call failed with HTTP {}: {}", status, body);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            Err(ApiError::new(status, message))
        }
        Err(err) => Err(err.into()),
    }
}

/// Create the booking router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(booking_handler))
}
