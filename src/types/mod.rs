// src/types/mod.rs
//! Domain types: validated configuration values, the parameter set, and the
//! request descriptor handed to the executor.

use thiserror::Error;

mod domain_types;
mod params;
mod request;

pub use domain_types::*;
pub use params::*;
pub use request::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API token format: {reason}")]
    InvalidApiToken { reason: String },

    #[error("Invalid parameter '{input}': {reason}")]
    InvalidParameter { input: String, reason: String },

    #[error("Parameter '{key}' nests deeper than one level")]
    NestingTooDeep { key: String },

    #[error("Unknown HTTP verb: {0}")]
    UnknownVerb(String),
}
