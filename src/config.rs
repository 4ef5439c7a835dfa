#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

/// Connection parameters for one Hue hub, fixed for the process run.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub ip: String,
    pub username: String,
    pub device_type: String,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub hub: HubConfig,
    pub output_mode: OutputMode,
    pub verbose: bool,
}
