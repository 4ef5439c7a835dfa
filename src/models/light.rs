use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mutable state of a single light, as reported by the hub.
///
/// Everything is defaulted: older bridge firmware omits fields newer
/// firmware reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LightState {
    pub on: bool,
    /// Hue, 0-65535 across the color wheel.
    pub hue: u16,
    /// Saturation, 0-254.
    pub sat: u8,
    /// Brightness, 1-254.
    pub bri: u8,
    pub alert: String,
    pub colormode: String,
    /// Color temperature in mireds.
    pub ct: u16,
    pub effect: String,
    pub reachable: bool,
    pub xy: Vec<f64>,
}

/// Full record for a single light.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub state: LightState,
    #[serde(rename = "type")]
    pub light_type: String,
    pub name: String,
    pub modelid: String,
    pub swversion: String,
    pub pointsymbol: HashMap<String, String>,
}

/// Entry of the lights collection listing; the hub only reports names there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSummary {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_light_record() {
        let body = r#"{
            "state": {
                "on": true,
                "bri": 200,
                "hue": 50000,
                "sat": 254,
                "xy": [0.5, 0.5],
                "ct": 500,
                "alert": "none",
                "effect": "none",
                "colormode": "hs",
                "reachable": true
            },
            "type": "Extended color light",
            "name": "Kitchen",
            "modelid": "LCT001",
            "swversion": "66009461",
            "pointsymbol": {"1": "none"}
        }"#;
        let light: Light = serde_json::from_str(body).unwrap();
        assert_eq!(light.name, "Kitchen");
        assert_eq!(light.light_type, "Extended color light");
        assert!(light.state.on);
        assert_eq!(light.state.bri, 200);
        assert_eq!(light.state.hue, 50000);
        assert_eq!(light.state.xy, vec![0.5, 0.5]);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let light: Light = serde_json::from_str(r#"{"name":"Hall"}"#).unwrap();
        assert_eq!(light.name, "Hall");
        assert!(!light.state.on);
        assert!(light.state.xy.is_empty());
        assert!(light.pointsymbol.is_empty());
    }
}
