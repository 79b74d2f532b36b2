// src/api/pagination.rs
//! Link-header pagination.
//!
//! Canvas pages every collection and advertises the following page in the
//! `Link` response header:
//!
//! ```text
//! Link: <https://host/api/v1/courses?page=1&per_page=100>; rel="current",
//!       <https://host/api/v1/courses?page=2&per_page=100>; rel="next",
//!       <https://host/api/v1/courses?page=1&per_page=100>; rel="first"
//! ```
//!
//! The follower GETs each `rel="next"` URL verbatim until none is left,
//! concatenating the JSON arrays in arrival order.

use super::responses::{ApiResponse, RawResponse};
use super::Transport;
use crate::constants::MAX_FOLLOWED_PAGES;
use crate::error::CanvasError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// One `<url>; param; param` entry. Parameters run up to the next entry.
static LINK_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<\s*([^>]*?)\s*>([^,<]*)")
        .expect("Failed to compile Link entry regex - this is a bug in the code")
});

const NEXT_RELATION: &str = r#"rel="next""#;

/// Finds the URL of the `rel="next"` entry in one `Link` header value.
///
/// Anything that does not parse counts as "no next page".
pub fn parse_next_link(header: &str) -> Option<&str> {
    LINK_ENTRY.captures_iter(header).find_map(|captures| {
        let url = captures.get(1)?.as_str();
        let params = captures.get(2)?.as_str();
        let is_next = params.split(';').map(str::trim).any(|p| p == NEXT_RELATION);
        (is_next && !url.is_empty()).then_some(url)
    })
}

/// Next-page URL advertised by `response`, across all its `Link` headers.
pub fn next_link(response: &RawResponse) -> Option<String> {
    response
        .header_values("link")
        .find_map(parse_next_link)
        .map(str::to_string)
}

/// Walks the `next` links of a GET response and merges the pages.
pub struct PaginationFollower<'a, T: Transport + ?Sized> {
    transport: &'a T,
    limit: usize,
}

impl<'a, T: Transport + ?Sized> PaginationFollower<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            limit: MAX_FOLLOWED_PAGES,
        }
    }

    /// Overrides how many follow-up pages may be fetched.
    pub fn with_limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }

    /// Collects every page starting from an already decoded first page.
    ///
    /// A first page that is not a JSON array is a single resource and is
    /// returned as-is. If a follow-up page answers with a non-success
    /// status, that page's decoded body is returned instead of the partial
    /// listing, just like a failing first request.
    pub fn collect(
        &self,
        first_page: Value,
        first_response: &RawResponse,
    ) -> Result<ApiResponse, CanvasError> {
        let mut items = match first_page {
            Value::Array(items) => items,
            single => return Ok(ApiResponse::single(single, first_response.status)),
        };

        let mut followed = 0usize;
        let mut next = next_link(first_response);

        while let Some(url) = next {
            if followed >= self.limit {
                log::error!(
                    "Giving up after {} follow-up pages; {} still links to more",
                    followed,
                    first_response.url
                );
                return Err(CanvasError::PaginationLimitExceeded {
                    limit: self.limit,
                    url,
                });
            }

            log::debug!("Following page {}: {}", followed + 2, url);
            let response = self.transport.follow(&url)?;
            followed += 1;

            if !response.is_success() {
                log::warn!(
                    "Page {} of {} answered {}; returning its body",
                    followed + 1,
                    first_response.url,
                    response.status
                );
                return Ok(ApiResponse::single(response.decode_body()?, response.status));
            }

            match response.decode_body()? {
                Value::Array(page) => items.extend(page),
                other => {
                    return Err(CanvasError::MalformedResponse(format!(
                        "page {} ({}) is not a JSON array: {}",
                        followed + 1,
                        url,
                        json_kind(&other)
                    )))
                }
            }

            next = next_link(&response);
        }

        if followed > 0 {
            log::info!(
                "Collected {} items across {} pages from {}",
                items.len(),
                followed + 1,
                first_response.url
            );
        }

        Ok(ApiResponse {
            data: Value::Array(items),
            status: first_response.status,
            pages: followed + 1,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
