//! Wire shapes of the service's JSON payloads
//!
//! Only the fields the model needs are declared. Containers that carry the
//! cursor or item list have no `#[serde(default)]`, so their absence fails
//! deserialization.

use crate::model::{Account, Comment, Media};
use crate::pagination::{Cursor, PageObject, PageResult};
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

// ============================================================================
// Scalar helpers
// ============================================================================

/// Ids arrive as strings or numbers depending on the endpoint
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

fn id_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.parse().map_err(de::Error::custom),
        StringOrNumber::Number(n) => Ok(n),
    }
}

fn timestamp(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
}

// ============================================================================
// Connections
// ============================================================================

#[derive(Deserialize)]
pub(super) struct PageInfo {
    #[serde(default)]
    has_next_page: bool,
    #[serde(default)]
    end_cursor: Option<String>,
}

impl From<PageInfo> for Cursor {
    fn from(info: PageInfo) -> Self {
        Cursor::new(info.has_next_page, info.end_cursor.unwrap_or_default())
    }
}

#[derive(Deserialize)]
pub(super) struct Edge<N> {
    node: N,
}

/// `{ count, page_info, edges: [{ node }] }`
#[derive(Deserialize)]
pub(super) struct Connection<N> {
    #[serde(default)]
    count: Option<u64>,
    page_info: PageInfo,
    edges: Vec<Edge<N>>,
}

impl<N> Connection<N> {
    pub(super) fn into_page<T>(self) -> PageResult<T>
    where
        N: Into<T>,
    {
        let items = self.edges.into_iter().map(|e| e.node.into()).collect();
        PageResult::new(items, self.page_info.into()).with_count(self.count)
    }

    pub(super) fn into_page_object<T>(self) -> PageObject<T>
    where
        N: Into<T>,
    {
        self.into_page().into()
    }
}

#[derive(Deserialize, Default)]
pub(super) struct Counter {
    #[serde(default)]
    count: u64,
}

#[derive(Deserialize, Default)]
struct TextEdges {
    #[serde(default)]
    edges: Vec<Edge<TextNode>>,
}

#[derive(Deserialize)]
struct TextNode {
    #[serde(default)]
    text: String,
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Deserialize)]
pub(super) struct UserNode {
    #[serde(default, deserialize_with = "id_number")]
    id: u64,
    #[serde(default)]
    username: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    biography: Option<String>,
    #[serde(default)]
    external_url: Option<String>,
    #[serde(default, alias = "profile_picture")]
    profile_pic_url: Option<String>,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    is_verified: bool,
    #[serde(default)]
    edge_followed_by: Counter,
    #[serde(default)]
    edge_follow: Counter,
    #[serde(default)]
    edge_owner_to_timeline_media: Counter,
}

impl From<UserNode> for Account {
    fn from(node: UserNode) -> Self {
        Account {
            id: node.id,
            username: node.username,
            full_name: node.full_name,
            biography: node.biography,
            external_url: node.external_url,
            profile_pic_url: node.profile_pic_url,
            is_private: node.is_private,
            is_verified: node.is_verified,
            followed_by_count: node.edge_followed_by.count,
            follows_count: node.edge_follow.count,
            media_count: node.edge_owner_to_timeline_media.count,
        }
    }
}

#[derive(Deserialize)]
pub(super) struct MediaNode {
    #[serde(default, deserialize_with = "id_string")]
    id: String,
    #[serde(default, alias = "code")]
    shortcode: String,
    #[serde(default)]
    display_url: Option<String>,
    #[serde(default)]
    is_video: bool,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    taken_at_timestamp: Option<i64>,
    #[serde(default)]
    edge_media_to_caption: TextEdges,
    #[serde(default)]
    edge_media_preview_like: Option<Counter>,
    #[serde(default)]
    edge_liked_by: Option<Counter>,
    #[serde(default)]
    edge_media_to_comment: Counter,
    #[serde(default)]
    owner: Option<UserNode>,
}

impl From<MediaNode> for Media {
    fn from(node: MediaNode) -> Self {
        let like_count = node
            .edge_media_preview_like
            .or(node.edge_liked_by)
            .unwrap_or_default()
            .count;
        let caption = node
            .edge_media_to_caption
            .edges
            .into_iter()
            .next()
            .map(|e| e.node.text);

        Media {
            id: node.id,
            shortcode: node.shortcode,
            caption,
            display_url: node.display_url,
            is_video: node.is_video,
            video_url: node.video_url,
            taken_at: timestamp(node.taken_at_timestamp),
            like_count,
            comment_count: node.edge_media_to_comment.count,
            owner: node.owner.map(Account::from),
        }
    }
}

#[derive(Deserialize)]
pub(super) struct CommentNode {
    #[serde(default, deserialize_with = "id_string")]
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default, alias = "created_time")]
    created_at: Option<i64>,
    #[serde(default, alias = "from")]
    owner: Option<UserNode>,
}

impl From<CommentNode> for Comment {
    fn from(node: CommentNode) -> Self {
        Comment {
            id: node.id,
            text: node.text,
            created_at: timestamp(node.created_at),
            owner: node.owner.map(Account::from).unwrap_or_default(),
        }
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// `{ graphql: { ... } }` page of the `?__a=1` endpoints
#[derive(Deserialize)]
pub(super) struct Graphql<T> {
    pub(super) graphql: T,
}

/// `{ data: { ... } }` page of the `/graphql/query/` endpoint
#[derive(Deserialize)]
pub(super) struct Data<T> {
    pub(super) data: T,
}

#[derive(Deserialize)]
pub(super) struct UserEnvelope<T> {
    pub(super) user: T,
}

#[derive(Deserialize)]
pub(super) struct TimelineMedia {
    pub(super) edge_owner_to_timeline_media: Connection<MediaNode>,
}

#[derive(Deserialize)]
pub(super) struct LastMedia {
    pub(super) edge_owner_to_timeline_media: LastMediaEdges,
}

#[derive(Deserialize)]
pub(super) struct LastMediaEdges {
    pub(super) edges: Vec<Edge<ShortcodeNode>>,
}

#[derive(Deserialize)]
pub(super) struct ShortcodeNode {
    pub(super) shortcode: String,
}

impl<N> Edge<N> {
    pub(super) fn into_node(self) -> N {
        self.node
    }
}

#[derive(Deserialize)]
pub(super) struct FollowedBy {
    pub(super) edge_followed_by: Connection<UserNode>,
}

#[derive(Deserialize)]
pub(super) struct Follows {
    pub(super) edge_follow: Connection<UserNode>,
}

#[derive(Deserialize)]
pub(super) struct ShortcodeMedia<T> {
    pub(super) shortcode_media: T,
}

#[derive(Deserialize)]
pub(super) struct MediaComments {
    pub(super) edge_media_to_comment: Connection<CommentNode>,
}

#[derive(Deserialize)]
pub(super) struct Hashtag<T> {
    pub(super) hashtag: T,
}

#[derive(Deserialize)]
pub(super) struct HashtagNode {
    #[serde(default)]
    pub(super) name: String,
    pub(super) edge_hashtag_to_media: Connection<MediaNode>,
}

#[derive(Deserialize)]
pub(super) struct LocationEnvelope<T> {
    pub(super) location: T,
}

#[derive(Deserialize)]
pub(super) struct LocationMedias {
    pub(super) edge_location_to_media: Connection<MediaNode>,
}

#[derive(Deserialize)]
pub(super) struct CommentResponse {
    #[serde(default)]
    pub(super) status: String,
    #[serde(flatten)]
    pub(super) comment: CommentNode,
}
