//! HTTP client backed by reqwest
//!
//! Provides the production `Transport`:
//! - Session cookies stored in the shared jar
//! - Default headers applied to every request
//! - Non-2xx statuses turned into `Error::HttpStatus`
//!
//! There is no retry and no rate limiting. Timeouts come from the
//! configuration and nothing else.

use super::session::Session;
use super::types::{HttpRequest, Transport};
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Desktop browser user agent; the web endpoints refuse unknown clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// reqwest-backed transport bound to one session
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    session: Session,
}

impl HttpClient {
    /// Create a client with default configuration and a fresh session
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default(), Session::new())
    }

    /// Create a client with custom configuration on the given session
    pub fn with_config(config: HttpClientConfig, session: Session) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .cookie_provider(session.jar())
            .build()?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: &HttpRequest) -> Result<Bytes> {
        let mut req = self
            .client
            .request(request.method.into(), request.url.clone());

        // Add default headers the request does not set itself
        for (key, value) in &self.config.default_headers {
            if request.header_value(key).is_none() {
                req = req.header(key.as_str(), value.as_str());
            }
        }

        // Add request-specific headers
        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref form) = request.form {
            req = req.form(form);
        }

        debug!("Sending {} {}", request.method, request.url);
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.bytes().await?;
        debug!(
            "Request succeeded: {} {} ({} bytes)",
            request.method,
            request.url,
            body.len()
        );
        Ok(body)
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
