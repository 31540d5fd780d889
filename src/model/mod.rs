//! Domain model
//!
//! Value objects returned by the client. The pagination engine never looks
//! inside them; only the mappers in [`crate::decode`] know their layout.

mod code;

pub use code::{media_code_from_id, media_id_from_code};

use crate::pagination::PageObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Numeric account id
    pub id: u64,
    /// Handle
    pub username: String,
    /// Display name
    pub full_name: Option<String>,
    /// Profile text
    pub biography: Option<String>,
    /// Link shown on the profile
    pub external_url: Option<String>,
    /// Avatar URL
    pub profile_pic_url: Option<String>,
    /// Private profile flag
    pub is_private: bool,
    /// Verified badge flag
    pub is_verified: bool,
    /// Number of followers
    pub followed_by_count: u64,
    /// Number of accounts followed
    pub follows_count: u64,
    /// Number of media posted
    pub media_count: u64,
}

/// A photo or video post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Media id
    pub id: String,
    /// Shortcode used in `/p/{code}/` links
    pub shortcode: String,
    /// Caption text
    pub caption: Option<String>,
    /// Full-size image URL
    pub display_url: Option<String>,
    /// Video flag
    pub is_video: bool,
    /// Video URL when `is_video`
    pub video_url: Option<String>,
    /// Publication time
    pub taken_at: Option<DateTime<Utc>>,
    /// Number of likes
    pub like_count: u64,
    /// Number of comments
    pub comment_count: u64,
    /// Author. Feed entries only carry the id.
    pub owner: Option<Account>,
}

/// A hashtag with its media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Media under the tag; `count` is the tag's total
    pub medias: PageObject<Media>,
}

/// A place with its media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Location id
    pub id: String,
    /// Media posted at the location
    pub medias: PageObject<Media>,
}

/// A comment on a media item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id
    pub id: String,
    /// Comment text
    pub text: String,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Author
    pub owner: Account,
}

/// Result of a state-changing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse<T> {
    /// Status reported by the service, `"ok"` on success
    pub status: String,
    /// Created object
    pub payload: T,
}

impl<T> ActionResponse<T> {
    /// Check if the service reported success
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
