//! API routes module

pub mod booking;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Booking (Calendly proxy) routes
        .nest("/booking", booking::router())
}
