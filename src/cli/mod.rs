//! CLI module
//!
//! Command-line interface over the client facade. Every command prints
//! its result as JSON.
//!
//! # Commands
//!
//! - `account`, `account-by-id` - Fetch an account
//! - `media`, `tag` - Fetch a single media item or tag
//! - `medias`, `tag-medias`, `location-medias`, `comments`, `followers`,
//!   `follows` - Paginated listings (`--pages`, `--after`)
//! - `like`, `unlike`, `comment`, `delete-comment` - Actions (log in first)
//! - `code` - Convert between shortcodes and media ids

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
