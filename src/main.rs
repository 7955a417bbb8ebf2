//! Resource gateway - Keto-authorized resource server
//!
//! Loads configuration, installs logging and serves the HTTP API.

use clap::Parser;
use resource_gateway::Config;
use resource_gateway::server;
use resource_gateway::utils::{LogFormat, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "Keto-authorized resource gateway")]
struct Cli {
    /// YAML configuration file; missing files fall back to defaults
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Log output format (`pretty` or `json`); overrides LOG_FORMAT
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.log_format.unwrap_or_else(LogFormat::from_env));

    info!("Loading configuration file: {}", cli.config.display());
    let config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
