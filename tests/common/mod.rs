// tests/common/mod.rs
//! Shared test helpers: a transport that replays canned responses.
#![allow(dead_code)]

use canvas_api::{CanvasError, RawResponse, Transport, Verb};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Send {
        verb: Verb,
        path: String,
        query: String,
    },
    Follow(String),
}

/// Answers calls from a queue (or with one repeated response) and records
/// everything it is asked to do.
#[derive(Default)]
pub struct RecordingTransport {
    queue: RefCell<VecDeque<RawResponse>>,
    repeat: Option<RawResponse>,
    pub calls: RefCell<Vec<Recorded>>,
}

impl RecordingTransport {
    pub fn replying(responses: Vec<RawResponse>) -> Self {
        Self {
            queue: RefCell::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn always(response: RawResponse) -> Self {
        Self {
            repeat: Some(response),
            ..Self::default()
        }
    }

    /// Answers every call with `200 {}`.
    pub fn ok_object() -> Self {
        Self::always(ok("{}"))
    }

    pub fn sends(&self) -> Vec<(Verb, String, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Recorded::Send { verb, path, query } => Some((*verb, path.clone(), query.clone())),
                Recorded::Follow(_) => None,
            })
            .collect()
    }

    pub fn follows(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Recorded::Follow(url) => Some(url.clone()),
                Recorded::Send { .. } => None,
            })
            .collect()
    }

    fn answer(&self) -> Result<RawResponse, CanvasError> {
        if let Some(response) = &self.repeat {
            return Ok(response.clone());
        }
        self.queue
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| CanvasError::Transport {
                url: "<recording>".to_string(),
                message: "no scripted response left".to_string(),
            })
    }
}

impl Transport for RecordingTransport {
    fn send(&self, verb: Verb, path: &str, query: &str) -> Result<RawResponse, CanvasError> {
        self.calls.borrow_mut().push(Recorded::Send {
            verb,
            path: path.to_string(),
            query: query.to_string(),
        });
        self.answer()
    }

    fn follow(&self, url: &str) -> Result<RawResponse, CanvasError> {
        self.calls.borrow_mut().push(Recorded::Follow(url.to_string()));
        self.answer()
    }
}

pub fn ok(body: &str) -> RawResponse {
    RawResponse::new("https://canvas.test/api/v1", 200, body)
}

/// A 200 page whose `Link` header points at `next`, if any.
pub fn page(body: &str, next: Option<&str>) -> RawResponse {
    let response = ok(body);
    match next {
        Some(url) => response.with_header(
            "Link",
            format!(r#"<https://canvas.test/api/v1/courses?page=1>; rel="current",<{}>; rel="next""#, url),
        ),
        None => response.with_header(
            "Link",
            r#"<https://canvas.test/api/v1/courses?page=1>; rel="first""#,
        ),
    }
}
