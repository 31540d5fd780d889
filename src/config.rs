//! Client configuration
//!
//! Settings for the HTTP client and the endpoints, loadable from YAML:
//!
//! ```yaml
//! base_url: https://www.instagram.com
//! timeout_secs: 30
//! page_size: 20
//! headers:
//!   Accept-Language: en-US
//! username: alice
//! password: secret
//! ```

use crate::auth::Credentials;
use crate::endpoint::{Endpoints, BASE_URL, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Items requested per GraphQL page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Login credentials
    #[serde(flatten)]
    pub credentials: Credentials,
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: None,
            headers: HashMap::new(),
            page_size: default_page_size(),
            credentials: Credentials::default(),
        }
    }
}

impl ClientConfig {
    /// Load and validate a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML config string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings the client cannot run without
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }
        Ok(())
    }

    /// Override credentials that were given explicitly
    #[must_use]
    pub fn with_credentials(mut self, username: Option<String>, password: Option<String>) -> Self {
        if username.is_some() {
            self.credentials.username = username;
        }
        if password.is_some() {
            self.credentials.password = password;
        }
        self
    }

    /// Transport settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder =
            HttpClientConfig::builder().timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        for (key, value) in &self.headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder.build()
    }

    /// Endpoint factory for the configured root
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.base_url.clone()).with_page_size(self.page_size)
    }
}
