//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Instagram scraper CLI
#[derive(Parser, Debug)]
#[command(name = "instagram-scraper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Login username
    #[arg(short, long, global = true, env = "INSTAGRAM_USERNAME")]
    pub username: Option<String>,

    /// Login password
    #[arg(short, long, global = true, env = "INSTAGRAM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Log in before running the command
    #[arg(long, global = true)]
    pub login: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Page budget and resume point of a listing
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Maximum number of pages to fetch
    #[arg(long, default_value = "1")]
    pub pages: usize,

    /// Resume after this cursor token
    #[arg(long)]
    pub after: Option<String>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an account by username
    Account {
        /// Account username
        username: String,
    },

    /// Fetch an account by numeric id
    AccountById {
        /// Account id
        id: u64,
    },

    /// List the media of an account
    Medias {
        /// Account username
        username: String,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Fetch a media item by shortcode or page URL
    Media {
        /// Shortcode, or a full `https://` page URL
        code_or_url: String,
    },

    /// Fetch a tag with its first page of media
    Tag {
        /// Tag name, without `#`
        name: String,
    },

    /// List the media under a tag
    TagMedias {
        /// Tag name, without `#`
        name: String,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// List the media posted at a location
    LocationMedias {
        /// Location id
        id: String,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// List the comments on a media item
    Comments {
        /// Media shortcode
        code: String,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// List the followers of an account
    Followers {
        /// Account id
        id: u64,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// List the accounts an account follows
    Follows {
        /// Account id
        id: u64,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Like a media item (requires login)
    Like {
        /// Media shortcode
        code: String,
    },

    /// Remove a like from a media item (requires login)
    Unlike {
        /// Media shortcode
        code: String,
    },

    /// Comment on a media item (requires login)
    Comment {
        /// Media shortcode
        code: String,

        /// Comment text
        text: String,
    },

    /// Delete a comment (requires login)
    DeleteComment {
        /// Media shortcode
        code: String,

        /// Comment id
        comment_id: String,
    },

    /// Convert between media shortcodes and numeric ids
    Code {
        /// Shortcode, or numeric id
        value: String,
    },
}

impl Commands {
    /// Whether the command changes state and needs a logged-in session
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Commands::Like { .. }
                | Commands::Unlike { .. }
                | Commands::Comment { .. }
                | Commands::DeleteComment { .. }
        )
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
