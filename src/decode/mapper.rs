//! Mapper trait and the JSON implementation

use super::wire::{
    CommentResponse, Data, FollowedBy, Follows, Graphql, Hashtag, HashtagNode, LastMedia,
    LocationEnvelope, LocationMedias, MediaComments, MediaNode, ShortcodeMedia, TimelineMedia,
    UserEnvelope, UserNode,
};
use crate::error::{Error, Result};
use crate::model::{Account, ActionResponse, Comment, Media, Tag};
use crate::pagination::PageResult;
use crate::types::MediaCode;
use serde::de::DeserializeOwned;

/// Converts response bodies into domain values
pub trait Mapper: Send + Sync {
    /// Profile page of an account
    fn map_account(&self, body: &[u8]) -> Result<Account>;

    /// Media page
    fn map_media(&self, body: &[u8]) -> Result<Media>;

    /// Tag page, with its first page of media
    fn map_tag(&self, body: &[u8]) -> Result<Tag>;

    /// Shortcode of the most recent media in an account's feed
    fn map_last_media_code(&self, body: &[u8]) -> Result<MediaCode>;

    /// Response of the add-comment action
    fn map_comment_response(&self, body: &[u8]) -> Result<ActionResponse<Comment>>;

    /// One page of an account's media feed
    fn map_medias_page(&self, body: &[u8]) -> Result<PageResult<Media>>;

    /// One page of a tag's media
    fn map_tag_medias_page(&self, body: &[u8]) -> Result<PageResult<Media>>;

    /// One page of a location's media
    fn map_location_medias_page(&self, body: &[u8]) -> Result<PageResult<Media>>;

    /// One page of an account's followers
    fn map_followers_page(&self, body: &[u8]) -> Result<PageResult<Account>>;

    /// One page of the accounts an account follows
    fn map_follows_page(&self, body: &[u8]) -> Result<PageResult<Account>>;

    /// One page of a media's comments
    fn map_comments_page(&self, body: &[u8]) -> Result<PageResult<Comment>>;
}

/// Mapper for the service's JSON payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMapper;

impl JsonMapper {
    /// Create a new JSON mapper
    pub fn new() -> Self {
        Self
    }
}

/// Syntax errors stay JSON errors; shape errors become mapping errors
fn parse<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        if e.is_syntax() || e.is_eof() {
            Error::JsonParse(e)
        } else {
            Error::mapping(format!("{what}: {e}"))
        }
    })
}

impl Mapper for JsonMapper {
    fn map_account(&self, body: &[u8]) -> Result<Account> {
        let page: Graphql<UserEnvelope<UserNode>> = parse(body, "account")?;
        Ok(page.graphql.user.into())
    }

    fn map_media(&self, body: &[u8]) -> Result<Media> {
        let page: Graphql<ShortcodeMedia<MediaNode>> = parse(body, "media")?;
        Ok(page.graphql.shortcode_media.into())
    }

    fn map_tag(&self, body: &[u8]) -> Result<Tag> {
        let page: Graphql<Hashtag<HashtagNode>> = parse(body, "tag")?;
        let hashtag = page.graphql.hashtag;
        Ok(Tag {
            name: hashtag.name,
            medias: hashtag.edge_hashtag_to_media.into_page_object(),
        })
    }

    fn map_last_media_code(&self, body: &[u8]) -> Result<MediaCode> {
        let page: Data<UserEnvelope<LastMedia>> = parse(body, "last media")?;
        page.data
            .user
            .edge_owner_to_timeline_media
            .edges
            .into_iter()
            .next()
            .map(|edge| MediaCode::new(edge.into_node().shortcode))
            .ok_or_else(|| Error::mapping("last media: account has no media"))
    }

    fn map_comment_response(&self, body: &[u8]) -> Result<ActionResponse<Comment>> {
        let response: CommentResponse = parse(body, "comment response")?;
        Ok(ActionResponse {
            status: response.status,
            payload: response.comment.into(),
        })
    }

    fn map_medias_page(&self, body: &[u8]) -> Result<PageResult<Media>> {
        let page: Graphql<UserEnvelope<TimelineMedia>> = parse(body, "medias page")?;
        Ok(page.graphql.user.edge_owner_to_timeline_media.into_page())
    }

    fn map_tag_medias_page(&self, body: &[u8]) -> Result<PageResult<Media>> {
        let page: Graphql<Hashtag<HashtagNode>> = parse(body, "tag medias page")?;
        Ok(page.graphql.hashtag.edge_hashtag_to_media.into_page())
    }

    fn map_location_medias_page(&self, body: &[u8]) -> Result<PageResult<Media>> {
        let page: Graphql<LocationEnvelope<LocationMedias>> =
            parse(body, "location medias page")?;
        Ok(page.graphql.location.edge_location_to_media.into_page())
    }

    fn map_followers_page(&self, body: &[u8]) -> Result<PageResult<Account>> {
        let page: Data<UserEnvelope<FollowedBy>> = parse(body, "followers page")?;
        Ok(page.data.user.edge_followed_by.into_page())
    }

    fn map_follows_page(&self, body: &[u8]) -> Result<PageResult<Account>> {
        let page: Data<UserEnvelope<Follows>> = parse(body, "follows page")?;
        Ok(page.data.user.edge_follow.into_page())
    }

    fn map_comments_page(&self, body: &[u8]) -> Result<PageResult<Comment>> {
        let page: Data<ShortcodeMedia<MediaComments>> = parse(body, "comments page")?;
        Ok(page.data.shortcode_media.edge_media_to_comment.into_page())
    }
}
