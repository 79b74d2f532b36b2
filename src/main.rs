// src/main.rs
//! `canvas-api` command: one Canvas request from the command line.

use canvas_api::{ApiResponse, CanvasClient, CanvasError, CommandLineInput, RunConfig};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
///
/// Console output goes to stderr so stdout carries only the JSON body.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("canvas_api.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs the single request described by the configuration.
fn execute_request(config: &RunConfig) -> Result<ApiResponse, CanvasError> {
    let client = CanvasClient::connect(&config.client)?;
    let response = client.execute(&config.request)?;

    if response.is_client_error() {
        log::warn!(
            "Canvas answered {} for {} {}",
            response.status,
            config.request.verb(),
            config.request.path()
        );
    } else if response.pages > 1 {
        log::info!("Merged {} pages", response.pages);
    }

    Ok(response)
}

/// Prints or saves the decoded body, or the whole envelope with `--envelope`.
fn deliver(config: &RunConfig, response: &ApiResponse) -> Result<(), CanvasError> {
    let rendered = match (config.envelope, config.compact) {
        (true, true) => serde_json::to_string(response)?,
        (true, false) => serde_json::to_string_pretty(response)?,
        (false, true) => serde_json::to_string(&response.data)?,
        (false, false) => serde_json::to_string_pretty(&response.data)?,
    };

    match &config.output_file {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered))?;
            eprintln!("✓ Response saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = RunConfig::resolve(cli)?;
    log::debug!("Resolved configuration: {:?}", config);

    let response = execute_request(&config)?;
    deliver(&config, &response)?;

    Ok(())
}
