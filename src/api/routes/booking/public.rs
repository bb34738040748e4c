//! Public types for the booking API
use serde::Deserialize;

/// Operation selector sent by the front end. Anything unrecognized maps
/// to `Unknown` so dispatch can reject it without an upstream call.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    GetUserInfo,
    GetEventTypes,
    GetScheduledEvents,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize)]
pub struct BookingRequest {
    pub action: BookingAction,
    #[serde(default)]
    pub user_uri: Option<String>,
}
