use serde_json::json;

use crate::api::client::HubClient;
use crate::cli::output::{print_error, print_json};
use crate::cli::{PowerState, SetArgs};
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::light_update::LightUpdate;

pub async fn handle(args: &SetArgs, config: &RuntimeConfig) -> Result<(), AppError> {
    let update = build_update(args);
    if update.is_empty() {
        return Err(AppError::InvalidInput(
            "No state changes requested; pass at least one of --power, --hue, --sat, --bri".into(),
        ));
    }

    let client = HubClient::new(&config.hub, config.verbose)?;

    let targets = match &args.light {
        Some(id) => vec![id.clone()],
        None => {
            let lights = client.list_lights().await?;
            let mut ids: Vec<String> = lights.into_keys().collect();
            ids.sort();
            ids
        }
    };

    // Each light is an independent call; one failure never blocks the rest.
    let total = targets.len();
    let mut failed = 0;
    for id in &targets {
        match client.set_light_state(id, &update).await {
            Ok(_) => print_json(&json!({"light": id, "state": &update})),
            Err(err) => {
                failed += 1;
                eprintln!("Failed to update light {}:", id);
                print_error(&err);
            }
        }
    }

    if failed > 0 {
        return Err(AppError::PartialFailure { failed, total });
    }
    Ok(())
}

fn build_update(args: &SetArgs) -> LightUpdate {
    let mut update = LightUpdate::new();
    if let Some(power) = args.power {
        update = update.on(matches!(power, PowerState::On));
    }
    if let Some(hue) = args.hue {
        update = update.hue(hue);
    }
    if let Some(sat) = args.sat {
        update = update.sat(sat);
    }
    if let Some(bri) = args.bri {
        update = update.bri(bri);
    }
    update
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_carries_only_provided_flags() {
        let args = SetArgs {
            light: None,
            power: Some(PowerState::On),
            hue: None,
            sat: None,
            bri: Some(200),
        };
        let update = build_update(&args);
        assert_eq!(update.on, Some(true));
        assert_eq!(update.bri, Some(200));
        assert_eq!(update.hue, None);
        assert_eq!(update.sat, None);
    }

    #[test]
    fn no_flags_build_an_empty_update() {
        let args = SetArgs {
            light: Some("1".into()),
            power: None,
            hue: None,
            sat: None,
            bri: None,
        };
        assert!(build_update(&args).is_empty());
    }
}
