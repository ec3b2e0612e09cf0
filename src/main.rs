//! Campus Tracker - student, alumni and admin tracking service
//!
//! Loads configuration, installs logging and serves the HTTP API.

#![allow(missing_docs)]

use campus_tracker::config::Config;
use campus_tracker::server;
use campus_tracker::utils::init_logging;
use clap::{Arg, Command};
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_CONFIG_PATH: &str = "config/tracker.yaml";

fn cli() -> Command {
    Command::new("campus-tracker")
        .version(campus_tracker::VERSION)
        .about(campus_tracker::DESCRIPTION)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .env("TRACKER_CONFIG")
                .default_value(DEFAULT_CONFIG_PATH)
                .help("YAML configuration file; defaults and TRACKER_* variables apply when missing"),
        )
}

async fn load_config(path: &str) -> campus_tracker::Result<Config> {
    if Path::new(path).exists() {
        Config::from_file(path).await
    } else {
        Config::from_env()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let matches = cli().get_matches();
    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);

    let config = match load_config(config_path).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if !Path::new(config_path).exists() {
        tracing::info!(
            "Configuration file {} not found, using defaults and environment",
            config_path
        );
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
