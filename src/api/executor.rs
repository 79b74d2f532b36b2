// src/api/executor.rs
//! The request engine shared by every Canvas resource.
//!
//! # Errors are data
//!
//! A Canvas 4xx is **not** an `Err`. The error body (typically
//! `{"errors": [...]}` or `{"message": "..."}`) is decoded and returned
//! exactly like a success body, with its status in
//! [`ApiResponse::status`]. Callers decide what counts as a failure by
//! looking at the body. `Err` is reserved for transport failures, bodies
//! that are not JSON, and runaway pagination.

use super::pagination::PaginationFollower;
use super::query::encode_query;
use super::responses::ApiResponse;
use super::Transport;
use crate::constants::{API_BASE_SEGMENT, CANVAS_PAGE_SIZE, PER_PAGE_PARAM};
use crate::error::CanvasError;
use crate::types::{ParamSet, RequestDescriptor, Verb};
use std::borrow::Cow;

/// Executes Canvas requests over a [`Transport`].
///
/// Holds no state besides the transport, so one client can serve any
/// number of independent calls.
#[derive(Debug, Clone)]
pub struct CanvasClient<T> {
    transport: T,
}

impl<T: Transport> CanvasClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one logical call.
    ///
    /// GET requests always ask for `per_page=100` (replacing any value the
    /// caller set) and follow `Link` pagination to the end. PUT, POST and
    /// DELETE return the single decoded body, `Link` header or not.
    pub fn execute(&self, request: &RequestDescriptor) -> Result<ApiResponse, CanvasError> {
        let verb = request.verb();
        let path = api_path(request.path());
        let params = outgoing_params(request);
        let query = encode_query(&params);

        log::debug!("{} {}?{}", verb, path, query);
        let response = self.transport.send(verb, &path, &query)?;

        if !response.is_success() {
            if response.is_client_error() {
                log::warn!("{} {} answered {}", verb, path, response.status);
            } else {
                log::error!("{} {} answered {}", verb, path, response.status);
            }
            return Ok(ApiResponse::single(response.decode_body()?, response.status));
        }

        let body = response.decode_body()?;
        if verb.is_read() {
            PaginationFollower::new(&self.transport).collect(body, &response)
        } else {
            Ok(ApiResponse::single(body, response.status))
        }
    }

    pub fn get(&self, path: &str, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.execute(&RequestDescriptor::get(path).with_params(params))
    }

    pub fn put(&self, path: &str, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.execute(&RequestDescriptor::put(path).with_params(params))
    }

    pub fn post(&self, path: &str, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.execute(&RequestDescriptor::post(path).with_params(params))
    }

    pub fn delete(&self, path: &str, params: ParamSet) -> Result<ApiResponse, CanvasError> {
        self.execute(&RequestDescriptor::delete(path).with_params(params))
    }
}

/// Mounts a resource path under the API base segment.
pub fn api_path(path: &str) -> String {
    format!("{}/{}", API_BASE_SEGMENT, path.trim_start_matches('/'))
}

/// Parameters actually sent: reads get the maximum page size.
fn outgoing_params(request: &RequestDescriptor) -> Cow<'_, ParamSet> {
    match request.verb() {
        Verb::Get => {
            let mut params = request.params().clone();
            params.insert(PER_PAGE_PARAM, CANVAS_PAGE_SIZE);
            Cow::Owned(params)
        }
        Verb::Put | Verb::Post | Verb::Delete => Cow::Borrowed(request.params()),
    }
}
