//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// User-facing error messages, localized to match the site's copy.
pub mod messages {
    pub const MISSING_CONFIG: &str = "Configuration manquante";
    pub const INVALID_REQUEST: &str = "Requête invalide";
    pub const UNKNOWN_ACTION: &str = "Action non reconnue";
    pub const MISSING_USER_URI: &str = "Paramètre user_uri manquant";
    pub const INTERNAL_ERROR: &str = "Erreur interne du serveur";
    pub const USER_INFO_FAILED: &str =
        "Erreur lors de la récupération des informations utilisateur";
    pub const EVENT_TYPES_FAILED: &str =
        "Erreur lors de la récupération des types d'événements";
    pub const SCHEDULED_EVENTS_FAILED: &str =
        "Erreur lors de la récupération des événements programmés";
}

// Errors

/// JSON envelope returned for every failed request. The site relies on
/// always getting well-formed JSON back so it can show its fallback
/// notice instead of failing silently.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`. The cause is
/// logged; the caller only ever sees the generic localized message.
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        // Always log the error
        tracing::error!("{}", err.into());

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: messages::INTERNAL_ERROR.to_string(),
        }
    }
}

// Re-export public types from each route

pub mod booking {
    pub use crate::api::routes::booking::public::*;
}
