use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::light::Light;

/// Everything the hub reports for one registered user: the per-user root
/// resource. Groups and schedules pass through as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub lights: HashMap<String, Light>,
    pub groups: HashMap<String, serde_json::Value>,
    pub config: BridgeConfig,
    pub schedules: HashMap<String, serde_json::Value>,
    pub scenes: HashMap<String, Scene>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub name: String,
    pub active: bool,
    pub lights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub name: String,
    pub mac: String,
    pub utc: String,
    pub localtime: String,
    pub swversion: String,
    pub apiversion: String,
    pub netmask: String,
    pub gateway: String,
    pub timezone: String,
    pub linkbutton: bool,
    pub portalservices: bool,
    pub portalconnection: String,
    pub proxyaddress: String,
    pub proxyport: u16,
    pub whitelist: HashMap<String, WhitelistEntry>,
    pub swupdate: SwUpdate,
    pub portalstate: PortalState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WhitelistEntry {
    #[serde(rename = "last use date")]
    pub last_use_date: String,
    #[serde(rename = "create date")]
    pub create_date: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwUpdate {
    pub notify: bool,
    pub updatestate: i32,
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalState {
    pub incoming: bool,
    pub outgoing: bool,
    pub signedon: bool,
    pub connection: String,
}
