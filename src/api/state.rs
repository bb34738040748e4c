use crate::core::AppConfig;

/// Read-only state shared by all requests. The configuration (including
/// the Calendly credential) is injected once at startup and never
/// mutated.
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
