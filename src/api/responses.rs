// src/api/responses.rs
//! Raw and decoded Canvas responses.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::CanvasError;
use serde::Serialize;
use serde_json::Value;

/// An HTTP response as handed back by a [`super::Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub url: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// All values of the header `name`, compared case-insensitively.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Decodes the body as JSON. An empty body decodes to `null`.
    pub fn decode_body(&self) -> Result<Value, CanvasError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.body).map_err(|e| {
            let preview: String = self.body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
            CanvasError::MalformedResponse(format!(
                "{} (status {}) returned invalid JSON: {}. Body starts with: {}",
                self.url, self.status, e, preview
            ))
        })
    }
}

/// The decoded result of one logical call.
///
/// `status` is the HTTP status of the response the data came from: the
/// first page for a completed listing, the failing response otherwise.
/// `pages` counts the HTTP responses merged into `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub data: Value,
    pub status: u16,
    pub pages: usize,
}

impl ApiResponse {
    /// A body that came from a single HTTP response.
    pub fn single(data: Value, status: u16) -> Self {
        Self {
            data,
            status,
            pages: 1,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}
