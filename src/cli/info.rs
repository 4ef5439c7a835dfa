use crate::api::client::HubClient;
use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;

pub async fn handle(config: &RuntimeConfig) -> Result<(), AppError> {
    let client = HubClient::new(&config.hub, config.verbose)?;
    let info = client.get_user_info().await?;
    print_json(&serde_json::to_value(&info)?);
    Ok(())
}
