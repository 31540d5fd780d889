//! Authentication module
//!
//! Session login credentials and CSRF token injection.
//!
//! The service expects the value of the `csrftoken` cookie to be echoed in
//! an `X-CSRFToken` header on state-changing requests. The `Authenticator`
//! reads that cookie from the session jar and attaches it; it never fails.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::Credentials;
