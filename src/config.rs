// src/config.rs
//! Connection settings and command-line resolution.

use crate::constants::{BASE_URL_ENV_VAR, DEFAULT_TIMEOUT_SECS, TOKEN_ENV_VAR};
use crate::error::CanvasError;
use crate::types::{ApiToken, ParamSet, RequestDescriptor, ValidatedUrl, Verb};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Where and how to reach a Canvas instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: ValidatedUrl,
    pub api_token: ApiToken,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: ValidatedUrl, api_token: ApiToken) -> Self {
        Self {
            base_url,
            api_token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Reads `CANVAS_BASE_URL` and `CANVAS_API_TOKEN`.
    pub fn from_env() -> Result<Self, CanvasError> {
        let base_url = std::env::var(BASE_URL_ENV_VAR).map_err(|_| {
            CanvasError::MissingConfiguration(format!(
                "{} environment variable not set",
                BASE_URL_ENV_VAR
            ))
        })?;
        let token = read_token_env()?;
        Ok(Self::new(ValidatedUrl::parse(&base_url)?, ApiToken::new(token)?))
    }
}

fn read_token_env() -> Result<String, CanvasError> {
    std::env::var(TOKEN_ENV_VAR).map_err(|_| {
        CanvasError::MissingConfiguration(format!("{} environment variable not set", TOKEN_ENV_VAR))
    })
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// HTTP verb: get, put, post or delete
    pub verb: String,

    /// Resource path below /api/v1 (e.g., "courses/42/sections")
    pub path: String,

    /// Query parameter as key=value, key[]=value or key[name]=value (repeatable)
    #[arg(short = 'p', long = "param")]
    pub params: Vec<String>,

    /// Parameters as a JSON object, applied before any --param
    #[arg(long)]
    pub params_json: Option<String>,

    /// Canvas instance URL (e.g., "https://school.instructure.com")
    #[arg(long, env = "CANVAS_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Write the response body to this file instead of stdout
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Wrap the body as {"data": ..., "status": ..., "pages": ...}
    #[arg(long, default_value_t = false)]
    pub envelope: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration for one command-line invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub client: ClientConfig,
    pub request: RequestDescriptor,
    pub output_file: Option<PathBuf>,
    pub compact: bool,
    pub envelope: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, CanvasError> {
        let token = read_token_env()?;
        Self::resolve_with_token(cli, token)
    }

    /// Same as [`RunConfig::resolve`] with the token supplied directly.
    pub fn resolve_with_token(
        cli: CommandLineInput,
        token: impl Into<String>,
    ) -> Result<Self, CanvasError> {
        let api_token = ApiToken::new(token)?;
        let base_url = cli.base_url.as_deref().ok_or_else(|| {
            CanvasError::MissingConfiguration(format!(
                "pass --base-url or set {}",
                BASE_URL_ENV_VAR
            ))
        })?;
        let base_url = ValidatedUrl::parse(base_url)?;
        let verb: Verb = cli.verb.parse()?;

        let mut params = match &cli.params_json {
            Some(json) => ParamSet::try_from(serde_json::from_str::<serde_json::Value>(json)?)?,
            None => ParamSet::new(),
        };
        for assignment in &cli.params {
            params.parse_assignment(assignment)?;
        }

        Ok(RunConfig {
            client: ClientConfig::new(base_url, api_token)
                .with_timeout(Duration::from_secs(cli.timeout)),
            request: RequestDescriptor::new(verb, cli.path).with_params(params),
            output_file: cli.output_file.map(PathBuf::from),
            compact: cli.compact,
            envelope: cli.envelope,
            verbose: cli.verbose,
        })
    }
}
