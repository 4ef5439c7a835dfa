use serde_json::json;

use crate::api::client::HubClient;
use crate::api::errors::ERR_LINK_BUTTON_NOT_PRESSED;
use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;

pub async fn handle(config: &RuntimeConfig) -> Result<(), AppError> {
    let client = HubClient::new(&config.hub, config.verbose)?;

    let confirmed = match client.register_user().await {
        Ok(username) => username,
        Err(AppError::Api(err)) if err.code == ERR_LINK_BUTTON_NOT_PRESSED => {
            return Err(AppError::LinkButtonNotPressed);
        }
        Err(err) => return Err(err),
    };

    let username = if confirmed.is_empty() {
        client.username().to_string()
    } else {
        confirmed
    };
    print_json(&json!({"registered": true, "username": username}));
    Ok(())
}
