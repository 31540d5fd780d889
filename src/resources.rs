//! Paginated resources of the service
//!
//! Each resource pairs a URL builder with a page mapper. They are plain
//! values borrowed from the client, so building one per call is free.

use crate::decode::Mapper;
use crate::endpoint::Endpoints;
use crate::error::Result;
use crate::http::HttpRequest;
use crate::model::{Account, Comment, Media};
use crate::pagination::{Cursor, PageResult, PagedResource};
use crate::types::{LocationId, MediaCode, TagName, UserId, Username};

type BuildFn<S> = fn(&Endpoints, &S, &str) -> Result<HttpRequest>;
type MapFn<T> = fn(&dyn Mapper, &[u8]) -> Result<PageResult<T>>;

/// A listing endpoint with its page mapper
pub struct Resource<'a, S, T> {
    name: &'static str,
    endpoints: &'a Endpoints,
    mapper: &'a dyn Mapper,
    start: Cursor,
    build: BuildFn<S>,
    map: MapFn<T>,
}

impl<'a, S, T> Resource<'a, S, T> {
    fn new(
        name: &'static str,
        endpoints: &'a Endpoints,
        mapper: &'a dyn Mapper,
        build: BuildFn<S>,
        map: MapFn<T>,
    ) -> Self {
        Self {
            name,
            endpoints,
            mapper,
            start: Cursor::first_page(),
            build,
            map,
        }
    }

    #[must_use]
    fn starting_at(mut self, start: Cursor) -> Self {
        self.start = start;
        self
    }
}

impl<S: Sync, T: Send> PagedResource for Resource<'_, S, T> {
    type Selector = S;
    type Item = T;

    fn name(&self) -> &str {
        self.name
    }

    fn start_cursor(&self) -> Cursor {
        self.start.clone()
    }

    fn build_request(&self, selector: &S, token: &str) -> Result<HttpRequest> {
        (self.build)(self.endpoints, selector, token)
    }

    fn map_page(&self, body: &[u8]) -> Result<PageResult<T>> {
        (self.map)(self.mapper, body)
    }
}

// ============================================================================
// Resources
// ============================================================================

/// Media feed of an account, paged by `max_id`
pub fn account_medias<'a>(
    endpoints: &'a Endpoints,
    mapper: &'a dyn Mapper,
) -> Resource<'a, Username, Media> {
    Resource::new(
        "account medias",
        endpoints,
        mapper,
        |e, username, max_id| Ok(HttpRequest::get(e.account_medias(username, max_id)?)),
        |m, body| m.map_medias_page(body),
    )
}

/// Media under a hashtag
pub fn tag_medias<'a>(
    endpoints: &'a Endpoints,
    mapper: &'a dyn Mapper,
) -> Resource<'a, TagName, Media> {
    Resource::new(
        "tag medias",
        endpoints,
        mapper,
        |e, tag, max_id| Ok(HttpRequest::get(e.tag_medias(tag, max_id)?)),
        |m, body| m.map_tag_medias_page(body),
    )
}

/// Media posted at a location
pub fn location_medias<'a>(
    endpoints: &'a Endpoints,
    mapper: &'a dyn Mapper,
) -> Resource<'a, LocationId, Media> {
    Resource::new(
        "location medias",
        endpoints,
        mapper,
        |e, id, max_id| Ok(HttpRequest::get(e.location_medias(id, max_id)?)),
        |m, body| m.map_location_medias_page(body),
    )
}

/// Accounts following a user
pub fn followers<'a>(
    endpoints: &'a Endpoints,
    mapper: &'a dyn Mapper,
) -> Resource<'a, UserId, Account> {
    Resource::new(
        "followers",
        endpoints,
        mapper,
        |e, id, after| Ok(HttpRequest::get(e.followers(*id, after)?)),
        |m, body| m.map_followers_page(body),
    )
}

/// Accounts a user follows
pub fn follows<'a>(
    endpoints: &'a Endpoints,
    mapper: &'a dyn Mapper,
) -> Resource<'a, UserId, Account> {
    Resource::new(
        "follows",
        endpoints,
        mapper,
        |e, id, after| Ok(HttpRequest::get(e.follows(*id, after)?)),
        |m, body| m.map_follows_page(body),
    )
}

/// Comments on a media item. The endpoint reads its cursor as an offset,
/// so the first page is requested with `"0"`.
pub fn comments<'a>(
    endpoints: &'a Endpoints,
    mapper: &'a dyn Mapper,
) -> Resource<'a, MediaCode, Comment> {
    Resource::new(
        "comments",
        endpoints,
        mapper,
        |e, code, after| Ok(HttpRequest::get(e.comments(code, after)?)),
        |m, body| m.map_comments_page(body),
    )
    .starting_at(Cursor::offset_start())
}
