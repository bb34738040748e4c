use anyhow::{Result, anyhow};

use crate::calendly;
use crate::core::AppConfig;

/// Call the Calendly "current user" endpoint with the configured
/// credential and print the account details. The printed URI is the
/// `user_uri` the front end passes when listing event types and
/// scheduled events.
pub async fn run() -> Result<()> {
    let config = AppConfig::default();
    let secret = config
        .calendly_client_secret
        .ok_or_else(|| anyhow!("Set CALENDLY_CLIENT_SECRET in your environment"))?;

    let user = calendly::current_user(&config.calendly_api_base, &secret).await?;

    let resource = &user["resource"];
    let name = resource["name"].as_str().unwrap_or("<unknown>");
    let uri = resource["uri"].as_str().unwrap_or("<unknown>");

    println!("Authenticated as {}", name);
    println!("user_uri: {}", uri);

    Ok(())
}
