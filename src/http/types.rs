//! Transport types and traits
//!
//! Defines the request value and the transport abstraction used by the
//! pagination engine and the facade.

use super::session::Session;
use crate::error::Result;
use crate::types::Method;
use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

/// A fully built request, independent of any HTTP library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: Url,
    /// Request headers, in insertion order
    pub headers: Vec<(String, String)>,
    /// URL-encoded form body
    pub form: Option<Vec<(String, String)>>,
}

impl HttpRequest {
    /// Create a GET request
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: Vec::new(),
            form: None,
        }
    }

    /// Create a POST request with a form body (possibly empty)
    pub fn post(url: Url, form: Vec<(String, String)>) -> Self {
        Self {
            method: Method::POST,
            url,
            headers: Vec::new(),
            form: Some(form),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive)
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Sends requests and owns the session they run in.
///
/// Implementations must not retry: a failed send is returned as is.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw response body
    async fn send(&self, request: &HttpRequest) -> Result<Bytes>;

    /// The session whose cookies accompany every request
    fn session(&self) -> &Session;
}
