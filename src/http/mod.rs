//! HTTP transport module
//!
//! Provides the transport boundary the rest of the crate talks to.
//!
//! # Features
//!
//! - **Transport trait**: `send(request) -> bytes`, implemented by `HttpClient`
//!   and by in-memory fakes in tests
//! - **Session**: explicit cookie jar shared between the transport and the
//!   authenticator
//! - **No retries**: a failed request surfaces immediately

mod client;
mod session;
mod types;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_USER_AGENT};
pub use session::{Cookie, Session};
pub use types::{HttpRequest, Transport};


#[cfg(test)]
pub(crate) mod fake;
