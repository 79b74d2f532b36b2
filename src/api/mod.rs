// src/api/mod.rs
//! Canvas API interaction.
//!
//! The request engine (`executor`) only talks to the network through the
//! [`Transport`] trait. `client` provides the reqwest implementation;
//! tests plug in scripted transports.

pub mod client;
pub mod executor;
pub mod pagination;
pub mod query;
pub mod responses;

use crate::error::CanvasError;
use crate::types::Verb;

pub use client::HttpTransport;
pub use executor::CanvasClient;
pub use pagination::{parse_next_link, PaginationFollower};
pub use query::encode_query;
pub use responses::{ApiResponse, RawResponse};

/// The ability to move one HTTP exchange.
///
/// Implementations must return every HTTP status as a [`RawResponse`] and
/// reserve `Err` for failures below HTTP (DNS, connect, TLS, timeouts).
pub trait Transport {
    /// Sends `verb` to `path` (relative to the instance root) with `query`
    /// attached verbatim as the URL query string. An empty query means no
    /// `?` is appended.
    fn send(&self, verb: Verb, path: &str, query: &str) -> Result<RawResponse, CanvasError>;

    /// GETs an absolute URL exactly as given, as found in a `Link` header.
    fn follow(&self, url: &str) -> Result<RawResponse, CanvasError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, verb: Verb, path: &str, query: &str) -> Result<RawResponse, CanvasError> {
        (**self).send(verb, path, query)
    }

    fn follow(&self, url: &str) -> Result<RawResponse, CanvasError> {
        (**self).follow(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, verb: Verb, path: &str, query: &str) -> Result<RawResponse, CanvasError> {
        (**self).send(verb, path, query)
    }

    fn follow(&self, url: &str) -> Result<RawResponse, CanvasError> {
        (**self).follow(url)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! A transport that replays canned responses and records every call.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Send {
            verb: Verb,
            path: String,
            query: String,
        },
        Follow {
            url: String,
        },
    }

    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<RawResponse, CanvasError>>>,
        repeat: Option<RawResponse>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl ScriptedTransport {
        pub fn new(responses: Vec<RawResponse>) -> Self {
            Self {
                responses: RefCell::new(responses.into_iter().map(Ok).collect()),
                ..Self::default()
            }
        }

        /// Answers every call with the same response.
        pub fn repeating(response: RawResponse) -> Self {
            Self {
                repeat: Some(response),
                ..Self::default()
            }
        }

        pub fn failing(err: CanvasError) -> Self {
            Self {
                responses: RefCell::new(VecDeque::from([Err(err)])),
                ..Self::default()
            }
        }

        pub fn follow_count(&self) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|c| matches!(c, Call::Follow { .. }))
                .count()
        }

        fn next(&self) -> Result<RawResponse, CanvasError> {
            if let Some(response) = &self.repeat {
                return Ok(response.clone());
            }
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("scripted transport ran out of responses"))
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&self, verb: Verb, path: &str, query: &str) -> Result<RawResponse, CanvasError> {
            self.calls.borrow_mut().push(Call::Send {
                verb,
                path: path.to_string(),
                query: query.to_string(),
            });
            self.next()
        }

        fn follow(&self, url: &str) -> Result<RawResponse, CanvasError> {
            self.calls.borrow_mut().push(Call::Follow {
                url: url.to_string(),
            });
            self.next()
        }
    }
}
