// src/api/client.rs
//! Blocking HTTP transport for the Canvas API.
//!
//! A thin wrapper around reqwest's blocking client. It handles
//! authentication and turns every HTTP exchange into a [`RawResponse`];
//! status codes are never treated as errors here.

use super::executor::CanvasClient;
use super::responses::RawResponse;
use super::Transport;
use crate::config::ClientConfig;
use crate::error::CanvasError;
use crate::types::{ApiToken, ValidatedUrl, ValidationError, Verb};
use reqwest::blocking::{Client, Response};
use reqwest::{header, Method};

/// reqwest-backed [`Transport`] bound to one Canvas instance.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: ValidatedUrl,
}

impl HttpTransport {
    /// Creates a transport that authenticates every request with the
    /// configured token.
    pub fn new(config: &ClientConfig) -> Result<Self, CanvasError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(&config.api_token)?)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates the default headers for Canvas API requests.
    fn create_headers(token: &ApiToken) -> Result<header::HeaderMap, CanvasError> {
        let mut headers = header::HeaderMap::new();

        let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
            .map_err(|e| ValidationError::InvalidApiToken {
                reason: e.to_string(),
            })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Absolute URL for a resource path and an already encoded query.
    pub fn url_for(&self, path: &str, query: &str) -> String {
        let url = self.base_url.join_path(path);
        if query.is_empty() {
            url
        } else {
            format!("{}?{}", url, query)
        }
    }

    fn dispatch(&self, method: Method, url: &str) -> Result<RawResponse, CanvasError> {
        let response = self.client.request(method, url).send()?;
        into_raw_response(response)
    }
}

impl Transport for HttpTransport {
    fn send(&self, verb: Verb, path: &str, query: &str) -> Result<RawResponse, CanvasError> {
        let url = self.url_for(path, query);
        self.dispatch(method_for(verb), &url)
    }

    fn follow(&self, url: &str) -> Result<RawResponse, CanvasError> {
        self.dispatch(Method::GET, url)
    }
}

impl CanvasClient<HttpTransport> {
    /// Builds a client talking to a real Canvas instance.
    pub fn connect(config: &ClientConfig) -> Result<Self, CanvasError> {
        log::debug!("Connecting to {} with token {}", config.base_url, config.api_token);
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

fn method_for(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Put => Method::PUT,
        Verb::Post => Method::POST,
        Verb::Delete => Method::DELETE,
    }
}

/// Reads status, headers and body out of a reqwest response.
fn into_raw_response(response: Response) -> Result<RawResponse, CanvasError> {
    let url = response.url().to_string();
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response.text()?;

    Ok(RawResponse {
        url,
        status,
        headers,
        body,
    })
}
