use clap::Subcommand;
use serde_json::json;
use tabled::Tabled;

use crate::api::client::HubClient;
use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;

#[derive(Subcommand)]
pub enum LightsCommand {
    /// List all lights known to the hub
    List,

    /// Get full details for a single light
    Get {
        /// Light identifier
        id: String,
    },
}

#[derive(Tabled)]
struct LightRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
}

pub async fn handle(cmd: &LightsCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    match cmd {
        LightsCommand::List => handle_list(config).await,
        LightsCommand::Get { id } => handle_get(id, config).await,
    }
}

async fn handle_list(config: &RuntimeConfig) -> Result<(), AppError> {
    let client = HubClient::new(&config.hub, config.verbose)?;
    let lights = client.list_lights().await?;

    let mut ids: Vec<&String> = lights.keys().collect();
    ids.sort();

    if config.output_mode == OutputMode::Table {
        let rows: Vec<LightRow> = ids
            .iter()
            .map(|id| LightRow {
                id: id.to_string(),
                name: lights[*id].name.clone(),
            })
            .collect();
        print_table(&rows);
    } else {
        let entries: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| json!({"id": id, "name": lights[*id].name}))
            .collect();
        print_json(&json!(entries));
    }
    Ok(())
}

async fn handle_get(id: &str, config: &RuntimeConfig) -> Result<(), AppError> {
    let client = HubClient::new(&config.hub, config.verbose)?;
    let light = client.get_light(id).await?;
    print_json(&json!({"id": id, "light": light}));
    Ok(())
}
