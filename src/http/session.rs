//! Session cookie storage
//!
//! A `Session` wraps the reqwest cookie jar so that the transport and the
//! authenticator read the same cookies. Cloning a session shares the jar.
//!
//! Concurrent calls against one session are not supported: nothing orders
//! cookie updates coming from interleaved responses.

use reqwest::cookie::{CookieStore, Jar};
use std::sync::Arc;
use url::Url;

/// A single cookie visible for a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
}

/// Cookie jar for one logical session
#[derive(Clone, Default)]
pub struct Session {
    jar: Arc<Jar>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying jar, for wiring into a reqwest client
    pub fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    /// Store a `Set-Cookie` style string for a URL
    pub fn add_cookie(&self, cookie: &str, url: &Url) {
        self.jar.add_cookie_str(cookie, url);
    }

    /// Cookies the jar would send with a request to `url`
    pub fn cookies_for(&self, url: &Url) -> Vec<Cookie> {
        let Some(header) = self.jar.cookies(url) else {
            return Vec::new();
        };
        let Ok(raw) = header.to_str() else {
            return Vec::new();
        };

        raw.split(';')
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                Some(Cookie {
                    name: name.trim().to_string(),
                    value: value.trim().to_string(),
                })
            })
            .collect()
    }

    /// Value of the first cookie named `name` visible for `url`
    pub fn cookie_value(&self, url: &Url, name: &str) -> Option<String> {
        self.cookies_for(url)
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.value)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
