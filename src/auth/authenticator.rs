//! Authenticator implementation
//!
//! Copies the CSRF cookie of the session into a request header.

use crate::http::{HttpRequest, Session};
use std::borrow::Cow;
use tracing::debug;

/// Cookie holding the CSRF token
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header carrying the CSRF token
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Attaches the session's CSRF token to outgoing requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    cookie_name: String,
    header_name: String,
}

impl Default for Authenticator {
    fn default() -> Self {
        Self {
            cookie_name: CSRF_COOKIE.to_string(),
            header_name: CSRF_HEADER.to_string(),
        }
    }
}

impl Authenticator {
    /// Create an authenticator for the default cookie/header pair
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an authenticator with custom cookie and header names
    pub fn with_names(cookie_name: impl Into<String>, header_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            header_name: header_name.into(),
        }
    }

    /// Return the request with the token header added.
    ///
    /// When the session has no token cookie for the request URL the input
    /// is handed back borrowed, untouched.
    pub fn attach_token<'a>(
        &self,
        session: &Session,
        request: &'a HttpRequest,
    ) -> Cow<'a, HttpRequest> {
        match session.cookie_value(&request.url, &self.cookie_name) {
            Some(token) => {
                debug!("Attaching {} to {}", self.header_name, request.url);
                Cow::Owned(request.clone().header(self.header_name.as_str(), token))
            }
            None => Cow::Borrowed(request),
        }
    }
}
