pub mod info;
pub mod lights;
pub mod output;
pub mod register;
pub mod set;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "huectl",
    version,
    about = "Philips Hue CLI - control lights on a local Hue bridge"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// IP address of the Hue hub
    #[arg(long, env = "HUE_IP", default_value = "192.168.1.3", global = true)]
    pub ip: String,

    /// Username token registered with the hub
    #[arg(
        long,
        env = "HUE_USERNAME",
        default_value = "HueGoRaspberryPiUser",
        global = true
    )]
    pub username: String,

    /// Device type string reported to the hub
    #[arg(
        long,
        env = "HUE_DEVICE_TYPE",
        default_value = "HueGoRaspberryPi",
        global = true
    )]
    pub device_type: String,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (show HTTP requests/responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register the configured username with the hub
    Register,

    /// Dump info about the registered user (lights, config, scenes, ...)
    Info,

    /// Inspect lights
    #[command(subcommand)]
    Lights(lights::LightsCommand),

    /// Change light state
    Set(SetArgs),
}

#[derive(Args)]
pub struct SetArgs {
    /// Light to change; all lights when omitted
    #[arg(long)]
    pub light: Option<String>,

    /// Turn the light on or off
    #[arg(long, value_enum)]
    pub power: Option<PowerState>,

    /// Hue (0-65535)
    #[arg(long)]
    pub hue: Option<u16>,

    /// Saturation (0-254)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=254))]
    pub sat: Option<u8>,

    /// Brightness (1-254)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=254))]
    pub bri: Option<u8>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PowerState {
    On,
    Off,
}
