// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Instagram scraper
//!
//! An async client for Instagram's web endpoints, built around one
//! cursor-driven pagination engine.
//!
//! ## Features
//!
//! - **Accounts, media, tags, locations**: single-shot lookups
//! - **Paginated listings**: media feeds, tag and location media, comments,
//!   followers and follows, resumable from any returned cursor
//! - **Session handling**: cookie jar per client, CSRF token attached to
//!   state-changing calls
//! - **Actions**: login, like/unlike, add/delete comments
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use instagram_scraper::{Instagram, Username, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ig = Instagram::new()?;
//!
//!     let account = ig.get_account_by_username(&Username::new("instagram")).await?;
//!     let medias = ig.get_medias(&Username::new("instagram"), 2).await?;
//!
//!     // Continue where the first call stopped
//!     if medias.has_more() {
//!         let rest = ig
//!             .get_medias_after(&Username::new("instagram"), 2, medias.cursor.clone())
//!             .await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Instagram (facade)                      │
//! │  single-shot: send → map      listings: Paginator::paginate │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────┬───┴─────────┬──────────┬─────────┐
//! │ Transport  │ Auth        │ Pagination  │ Decode   │ Endpoint│
//! ├────────────┼─────────────┼─────────────┼──────────┼─────────┤
//! │ reqwest    │ csrftoken → │ Cursor      │ Mapper   │ {{ }}   │
//! │ cookie jar │ X-CSRFToken │ PageObject  │ wire JSON│ templ.  │
//! └────────────┴─────────────┴─────────────┴──────────┴─────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and selectors
pub mod types;

/// CSRF token handling and credentials
pub mod auth;

/// HTTP transport and session
pub mod http;

/// Cursor-driven pagination engine
pub mod pagination;

/// Response mappers
pub mod decode;

/// Domain model
pub mod model;

/// Endpoint URL templates
pub mod endpoint;

/// Paginated resources
pub mod resources;

/// Client facade
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::Credentials;
pub use client::Instagram;
pub use config::ClientConfig;
pub use endpoint::Endpoints;
pub use model::{Account, ActionResponse, Comment, Location, Media, Tag};
pub use pagination::{Cursor, PageObject};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
