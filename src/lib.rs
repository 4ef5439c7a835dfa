pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;

use cli::output::print_error;
use config::{HubConfig, OutputMode, RuntimeConfig};
use error::AppError;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        hub: HubConfig {
            ip: cli_args.ip,
            username: cli_args.username,
            device_type: cli_args.device_type,
        },
        output_mode: if cli_args.table {
            OutputMode::Table
        } else {
            OutputMode::Json
        },
        verbose: cli_args.verbose,
    };

    let result = dispatch(cli_args.command, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn dispatch(command: cli::Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    match command {
        cli::Commands::Register => cli::register::handle(config).await,
        cli::Commands::Info => cli::info::handle(config).await,
        cli::Commands::Lights(cmd) => cli::lights::handle(&cmd, config).await,
        cli::Commands::Set(args) => cli::set::handle(&args, config).await,
    }
}
