//! Client facade
//!
//! One async method per capability of the service. Single-shot calls send
//! one request and map the body; listings delegate to the [`Paginator`]
//! with the resource's start cursor, or with a cursor returned by an
//! earlier call in the `*_after` variants.
//!
//! Every call awaits each request before building the next. Calls sharing
//! one client share its session, so they must not run concurrently.

use crate::auth::{Authenticator, Credentials};
use crate::config::ClientConfig;
use crate::decode::{JsonMapper, Mapper};
use crate::endpoint::Endpoints;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpRequest, Session, Transport};
use crate::model::{
    media_id_from_code, Account, ActionResponse, Comment, Location, Media, Tag,
};
use crate::pagination::{Cursor, PageObject, PagedResource, Paginator};
use crate::resources;
use crate::types::{LocationId, MediaCode, TagName, UserId, Username};
use bytes::Bytes;
use tracing::{debug, info};

const REFERER: &str = "Referer";

/// Client for the service, generic over its transport
pub struct Instagram<T: Transport = HttpClient> {
    transport: T,
    mapper: Box<dyn Mapper>,
    endpoints: Endpoints,
    authenticator: Authenticator,
}

impl Instagram<HttpClient> {
    /// Create a client with default settings and a fresh session
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a client from configuration with a fresh session
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpClient::with_config(config.http_config(), Session::new())?;
        Ok(Self::with_transport(transport, config.endpoints()))
    }
}

impl<T: Transport> Instagram<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            mapper: Box::new(JsonMapper::new()),
            endpoints,
            authenticator: Authenticator::new(),
        }
    }

    /// Replace the response mapper
    #[must_use]
    pub fn with_mapper(mut self, mapper: impl Mapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    /// Replace the token authenticator
    #[must_use]
    pub fn with_authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = authenticator;
        self
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the session shared by every call
    pub fn session(&self) -> &Session {
        self.transport.session()
    }

    /// Get the endpoint factory
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Load the site root so the session receives its first CSRF cookie
    pub async fn base_page(&self) -> Result<()> {
        self.transport
            .send(&HttpRequest::get(self.endpoints.base()?))
            .await?;
        Ok(())
    }

    /// Log in with the given credentials.
    ///
    /// Missing credentials fail before any request is sent.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let (username, password) = credentials.require()?;

        let request = HttpRequest::post(
            self.endpoints.login()?,
            vec![
                ("username".to_string(), username.to_string()),
                ("password".to_string(), password.to_string()),
            ],
        )
        .header(REFERER, self.endpoints.referer());

        self.send_with_token(&request).await?;
        info!("Logged in as {username}");
        Ok(())
    }

    // ========================================================================
    // Single-shot reads
    // ========================================================================

    /// Account by numeric id, resolved through the owner of its latest media
    pub async fn get_account_by_id(&self, id: UserId) -> Result<Account> {
        let request = HttpRequest::get(self.endpoints.account_last_media(id)?)
            .header(REFERER, self.endpoints.referer());
        let body = self.send_with_token(&request).await?;
        let code = self.mapper.map_last_media_code(&body)?;
        debug!("Account {id} resolved to media {code}");

        self.get_media_by_code(&code)
            .await?
            .owner
            .ok_or_else(|| Error::mapping(format!("media {code}: owner missing")))
    }

    /// Account by username
    pub async fn get_account_by_username(&self, username: &Username) -> Result<Account> {
        let body = self
            .transport
            .send(&HttpRequest::get(self.endpoints.account_json_info(username)?))
            .await?;
        self.mapper.map_account(&body)
    }

    /// Media by its page URL
    pub async fn get_media_by_url(&self, url: &str) -> Result<Media> {
        let body = self
            .transport
            .send(&HttpRequest::get(self.endpoints.media_json(url)?))
            .await?;
        self.mapper.map_media(&body)
    }

    /// Media by shortcode
    pub async fn get_media_by_code(&self, code: &MediaCode) -> Result<Media> {
        let link = self.endpoints.media_page_link(code)?;
        self.get_media_by_url(&link).await
    }

    /// Tag with its first page of media
    pub async fn get_tag_by_name(&self, name: &TagName) -> Result<Tag> {
        let body = self
            .transport
            .send(&HttpRequest::get(self.endpoints.tag_json(name)?))
            .await?;
        self.mapper.map_tag(&body)
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// Media feed of an account
    pub async fn get_medias(
        &self,
        username: &Username,
        page_count: usize,
    ) -> Result<PageObject<Media>> {
        self.walk(
            &resources::account_medias(&self.endpoints, self.mapper.as_ref()),
            username,
            page_count,
            None,
        )
        .await
    }

    /// Media feed of an account, resumed at `cursor`
    pub async fn get_medias_after(
        &self,
        username: &Username,
        page_count: usize,
        cursor: Cursor,
    ) -> Result<PageObject<Media>> {
        self.walk(
            &resources::account_medias(&self.endpoints, self.mapper.as_ref()),
            username,
            page_count,
            Some(cursor),
        )
        .await
    }

    /// Media under a hashtag
    pub async fn get_medias_by_tag(&self, tag: &TagName, page_count: usize) -> Result<Tag> {
        self.get_medias_by_tag_inner(tag, page_count, None).await
    }

    /// Media under a hashtag, resumed at `cursor`
    pub async fn get_medias_by_tag_after(
        &self,
        tag: &TagName,
        page_count: usize,
        cursor: Cursor,
    ) -> Result<Tag> {
        self.get_medias_by_tag_inner(tag, page_count, Some(cursor))
            .await
    }

    async fn get_medias_by_tag_inner(
        &self,
        tag: &TagName,
        page_count: usize,
        cursor: Option<Cursor>,
    ) -> Result<Tag> {
        let medias = self
            .walk(
                &resources::tag_medias(&self.endpoints, self.mapper.as_ref()),
                tag,
                page_count,
                cursor,
            )
            .await?;
        Ok(Tag {
            name: tag.as_str().to_string(),
            medias,
        })
    }

    /// Media posted at a location
    pub async fn get_location_medias_by_id(
        &self,
        id: &LocationId,
        page_count: usize,
    ) -> Result<Location> {
        self.get_location_medias_inner(id, page_count, None).await
    }

    /// Media posted at a location, resumed at `cursor`
    pub async fn get_location_medias_by_id_after(
        &self,
        id: &LocationId,
        page_count: usize,
        cursor: Cursor,
    ) -> Result<Location> {
        self.get_location_medias_inner(id, page_count, Some(cursor))
            .await
    }

    async fn get_location_medias_inner(
        &self,
        id: &LocationId,
        page_count: usize,
        cursor: Option<Cursor>,
    ) -> Result<Location> {
        let medias = self
            .walk(
                &resources::location_medias(&self.endpoints, self.mapper.as_ref()),
                id,
                page_count,
                cursor,
            )
            .await?;
        Ok(Location {
            id: id.as_str().to_string(),
            medias,
        })
    }

    /// Comments on a media item, oldest offset first
    pub async fn get_comments_by_media_code(
        &self,
        code: &MediaCode,
        page_count: usize,
    ) -> Result<PageObject<Comment>> {
        self.walk(
            &resources::comments(&self.endpoints, self.mapper.as_ref()),
            code,
            page_count,
            None,
        )
        .await
    }

    /// Comments on a media item, resumed at `cursor`
    pub async fn get_comments_by_media_code_after(
        &self,
        code: &MediaCode,
        page_count: usize,
        cursor: Cursor,
    ) -> Result<PageObject<Comment>> {
        self.walk(
            &resources::comments(&self.endpoints, self.mapper.as_ref()),
            code,
            page_count,
            Some(cursor),
        )
        .await
    }

    /// Accounts a user follows
    pub async fn get_follows(
        &self,
        user_id: UserId,
        page_count: usize,
    ) -> Result<PageObject<Account>> {
        self.walk(
            &resources::follows(&self.endpoints, self.mapper.as_ref()),
            &user_id,
            page_count,
            None,
        )
        .await
    }

    /// Accounts a user follows, resumed at `cursor`
    pub async fn get_follows_after(
        &self,
        user_id: UserId,
        page_count: usize,
        cursor: Cursor,
    ) -> Result<PageObject<Account>> {
        self.walk(
            &resources::follows(&self.endpoints, self.mapper.as_ref()),
            &user_id,
            page_count,
            Some(cursor),
        )
        .await
    }

    /// Accounts following a user
    pub async fn get_followers(
        &self,
        user_id: UserId,
        page_count: usize,
    ) -> Result<PageObject<Account>> {
        self.walk(
            &resources::followers(&self.endpoints, self.mapper.as_ref()),
            &user_id,
            page_count,
            None,
        )
        .await
    }

    /// Accounts following a user, resumed at `cursor`
    pub async fn get_followers_after(
        &self,
        user_id: UserId,
        page_count: usize,
        cursor: Cursor,
    ) -> Result<PageObject<Account>> {
        self.walk(
            &resources::followers(&self.endpoints, self.mapper.as_ref()),
            &user_id,
            page_count,
            Some(cursor),
        )
        .await
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Like a media item
    pub async fn like_media_by_code(&self, code: &MediaCode) -> Result<()> {
        let url = self.endpoints.media_like(media_id_from_code(code)?)?;
        self.media_action(code, HttpRequest::post(url, Vec::new()))
            .await?;
        info!("Liked media {code}");
        Ok(())
    }

    /// Remove a like from a media item
    pub async fn unlike_media_by_code(&self, code: &MediaCode) -> Result<()> {
        let url = self.endpoints.media_unlike(media_id_from_code(code)?)?;
        self.media_action(code, HttpRequest::post(url, Vec::new()))
            .await?;
        info!("Unliked media {code}");
        Ok(())
    }

    /// Comment on a media item
    pub async fn add_media_comment(
        &self,
        code: &MediaCode,
        text: &str,
    ) -> Result<ActionResponse<Comment>> {
        let url = self.endpoints.add_comment(media_id_from_code(code)?)?;
        let request = HttpRequest::post(url, vec![("comment_text".to_string(), text.to_string())]);
        let body = self.media_action(code, request).await?;
        self.mapper.map_comment_response(&body)
    }

    /// Delete a comment from a media item
    pub async fn delete_media_comment(&self, code: &MediaCode, comment_id: &str) -> Result<()> {
        let url = self
            .endpoints
            .delete_comment(media_id_from_code(code)?, comment_id)?;
        self.media_action(code, HttpRequest::post(url, Vec::new()))
            .await?;
        info!("Deleted comment {comment_id} on media {code}");
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn send_with_token(&self, request: &HttpRequest) -> Result<Bytes> {
        let request = self
            .authenticator
            .attach_token(self.transport.session(), request);
        self.transport.send(&request).await
    }

    /// POST on behalf of a media page, with its link as referer
    async fn media_action(&self, code: &MediaCode, request: HttpRequest) -> Result<Bytes> {
        let referer = format!("{}/", self.endpoints.media_page_link(code)?);
        self.send_with_token(&request.header(REFERER, referer))
            .await
    }

    async fn walk<R: PagedResource>(
        &self,
        resource: &R,
        selector: &R::Selector,
        page_count: usize,
        cursor: Option<Cursor>,
    ) -> Result<PageObject<R::Item>> {
        let paginator = Paginator::new(&self.transport);
        match cursor {
            Some(cursor) => {
                paginator
                    .paginate(resource, selector, page_count, cursor)
                    .await
            }
            None => {
                paginator
                    .paginate_from_start(resource, selector, page_count)
                    .await
            }
        }
    }
}
