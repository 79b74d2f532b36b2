// src/types/request.rs
//! One logical Canvas call, described as plain data.

use super::{ParamSet, ValidationError};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs the Canvas API is driven with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Put,
    Post,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Put => "PUT",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }

    /// Only reads are paginated.
    pub fn is_read(&self) -> bool {
        matches!(self, Verb::Get)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "PUT" => Ok(Verb::Put),
            "POST" => Ok(Verb::Post),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(ValidationError::UnknownVerb(s.to_string())),
        }
    }
}

/// Verb, resource path and parameters of a single call.
///
/// Built fresh for every call and consumed by value in its builder
/// methods, so nothing can change it once it is handed to the executor.
/// The path is relative to the API root, e.g. `courses/42/sections`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    verb: Verb,
    path: String,
    params: ParamSet,
}

impl RequestDescriptor {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            params: ParamSet::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Verb::Get, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Verb::Put, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Verb::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Verb::Delete, path)
    }

    /// Replaces the parameter set.
    pub fn with_params(self, params: ParamSet) -> Self {
        Self { params, ..self }
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &ParamSet {
        &self.params
    }
}
