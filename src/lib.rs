// src/lib.rs
//! canvas-api library — a blocking client for the Canvas LMS REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `CanvasError`, `ValidationError`
//! - **Configuration** — `ClientConfig`, `RunConfig`, `CommandLineInput`
//! - **Request model** — `ParamSet`, `ParamValue`, `Scalar`, `RequestDescriptor`, `Verb`
//! - **API client** — `CanvasClient`, `Transport`, `HttpTransport`, `ApiResponse`
//! - **Resources** — `Courses`, `Sections`, `Users`, `Enrollments`
//!
//! Client-error responses (4xx) are returned as decoded data, not as
//! errors; see [`CanvasClient`].

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod resources;
pub mod types;

// --- Error Handling ---
pub use crate::error::{CanvasError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{ClientConfig, CommandLineInput, RunConfig};

// --- Request Model ---
pub use crate::types::{
    ApiToken, GroupKey, ParamSet, ParamValue, RequestDescriptor, Scalar, ValidatedUrl, Verb,
};

// --- API Client ---
pub use crate::api::{
    encode_query, parse_next_link, ApiResponse, CanvasClient, HttpTransport, PaginationFollower,
    RawResponse, Transport,
};

// --- Resources ---
pub use crate::resources::{Courses, EnrollmentScope, Enrollments, Sections, Users};
