use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub calendly_api_base: String,
    pub calendly_client_secret: Option<String>,
    pub site_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let calendly_api_base = env::var("CALENDLY_API_BASE")
            .unwrap_or_else(|_| "https://api.calendly.com".to_string());
        // Checked per request rather than at startup so the server can
        // boot and serve the static site without the secret present.
        let calendly_client_secret = env::var("CALENDLY_CLIENT_SECRET").ok();
        let site_path = env::var("BACKSTAGE_SITE_PATH").unwrap_or_else(|_| "./dist".to_string());

        Self {
            calendly_api_base,
            calendly_client_secret,
            site_path,
        }
    }
}
