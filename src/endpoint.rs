//! Endpoint URL templates
//!
//! Handles `{{ variable }}` interpolation of the service's URL templates.
//! Substituted values are percent-encoded; the base URL is prepended as is.

use crate::error::{Error, Result};
use crate::types::{LocationId, MediaCode, TagName, UserId, Username};
use regex::Regex;
use std::sync::LazyLock;
use url::form_urlencoded::byte_serialize;
use url::Url;

/// Regex for matching template variables: {{ variable }}
static TEMPLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").unwrap());

/// Default service root
pub const BASE_URL: &str = "https://www.instagram.com";

/// Default number of items requested per GraphQL page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

const LOGIN: &str = "/accounts/login/ajax/";
const ACCOUNT_JSON_INFO: &str = "/{{ username }}/?__a=1";
const ACCOUNT_MEDIAS: &str = "/{{ username }}/?__a=1&max_id={{ max_id }}";
const ACCOUNT_LAST_MEDIA: &str =
    "/graphql/query/?query_id=17888483320059182&id={{ user_id }}&first=1";
const MEDIA_LINK: &str = "/p/{{ code }}";
const TAG_JSON: &str = "/explore/tags/{{ tag }}/?__a=1";
const TAG_MEDIAS: &str = "/explore/tags/{{ tag }}/?__a=1&max_id={{ max_id }}";
const LOCATION_MEDIAS: &str = "/explore/locations/{{ location_id }}/?__a=1&max_id={{ max_id }}";
const FOLLOWERS: &str =
    "/graphql/query/?query_id=17851374694183129&id={{ user_id }}&first={{ first }}&after={{ after }}";
const FOLLOWS: &str =
    "/graphql/query/?query_id=17874545323001329&id={{ user_id }}&first={{ first }}&after={{ after }}";
const COMMENTS: &str =
    "/graphql/query/?query_id=17852405266163336&shortcode={{ code }}&first={{ first }}&after={{ after }}";
const MEDIA_LIKE: &str = "/web/likes/{{ media_id }}/like/";
const MEDIA_UNLIKE: &str = "/web/likes/{{ media_id }}/unlike/";
const COMMENT_ADD: &str = "/web/comments/{{ media_id }}/add/";
const COMMENT_DELETE: &str = "/web/comments/{{ media_id }}/delete/{{ comment_id }}/";

/// Scratch URL whose path encoder escapes single segments
static SEGMENT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://segment.invalid/").unwrap());

/// Percent-encode a value for use as one path segment (`/` included)
fn encode_path_segment(value: &str) -> String {
    let mut url = SEGMENT_URL.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(value);
    }
    let path = url.path();
    path.strip_prefix('/').unwrap_or(path).to_string()
}

/// Render a template, percent-encoding every substituted value.
///
/// Variables before the `?` are encoded as path segments, the others as
/// form values.
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String> {
    let mut missing = Vec::new();
    let query_start = template.find('?').unwrap_or(template.len());

    let rendered = TEMPLATE_REGEX.replace_all(template, |cap: &regex::Captures<'_>| {
        let name = &cap[1];
        let in_query = cap.get(0).is_some_and(|m| m.start() > query_start);
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) if in_query => byte_serialize(value.as_bytes()).collect::<String>(),
            Some((_, value)) => encode_path_segment(value),
            None => {
                missing.push(name.to_string());
                String::new()
            }
        }
    });

    if missing.is_empty() {
        Ok(rendered.into_owned())
    } else {
        Err(Error::undefined_var(missing.join(", ")))
    }
}

/// URL factory for every endpoint the client talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    page_size: u32,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl Endpoints {
    /// Create endpoints rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the GraphQL page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Service root without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Service root with trailing slash, as sent in `Referer`
    pub fn referer(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn url(&self, template: &str, vars: &[(&str, &str)]) -> Result<Url> {
        let path = render(template, vars)?;
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    /// Site root
    pub fn base(&self) -> Result<Url> {
        Ok(Url::parse(&self.referer())?)
    }

    /// Login form target
    pub fn login(&self) -> Result<Url> {
        self.url(LOGIN, &[])
    }

    /// Profile JSON of an account
    pub fn account_json_info(&self, username: &Username) -> Result<Url> {
        self.url(ACCOUNT_JSON_INFO, &[("username", username.as_str())])
    }

    /// Profile JSON page holding the media feed after `max_id`
    pub fn account_medias(&self, username: &Username, max_id: &str) -> Result<Url> {
        self.url(
            ACCOUNT_MEDIAS,
            &[("username", username.as_str()), ("max_id", max_id)],
        )
    }

    /// Latest media of an account, addressed by numeric id
    pub fn account_last_media(&self, user_id: UserId) -> Result<Url> {
        self.url(ACCOUNT_LAST_MEDIA, &[("user_id", user_id.to_string().as_str())])
    }

    /// Public page of a media item
    pub fn media_page_link(&self, code: &MediaCode) -> Result<String> {
        Ok(format!(
            "{}{}",
            self.base_url,
            render(MEDIA_LINK, &[("code", code.as_str())])?
        ))
    }

    /// JSON variant of a media page link
    pub fn media_json(&self, media_url: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/?__a=1",
            media_url.trim_end_matches('/')
        ))?)
    }

    /// Tag JSON
    pub fn tag_json(&self, tag: &TagName) -> Result<Url> {
        self.url(TAG_JSON, &[("tag", tag.as_str())])
    }

    /// Tag media page after `max_id`
    pub fn tag_medias(&self, tag: &TagName, max_id: &str) -> Result<Url> {
        self.url(TAG_MEDIAS, &[("tag", tag.as_str()), ("max_id", max_id)])
    }

    /// Location media page after `max_id`
    pub fn location_medias(&self, location_id: &LocationId, max_id: &str) -> Result<Url> {
        self.url(
            LOCATION_MEDIAS,
            &[("location_id", location_id.as_str()), ("max_id", max_id)],
        )
    }

    /// Followers page after `after`
    pub fn followers(&self, user_id: UserId, after: &str) -> Result<Url> {
        self.graphql_user_page(FOLLOWERS, user_id, after)
    }

    /// Follows page after `after`
    pub fn follows(&self, user_id: UserId, after: &str) -> Result<Url> {
        self.graphql_user_page(FOLLOWS, user_id, after)
    }

    fn graphql_user_page(&self, template: &str, user_id: UserId, after: &str) -> Result<Url> {
        self.url(
            template,
            &[
                ("user_id", user_id.to_string().as_str()),
                ("first", self.page_size.to_string().as_str()),
                ("after", after),
            ],
        )
    }

    /// Comments page after `after`
    pub fn comments(&self, code: &MediaCode, after: &str) -> Result<Url> {
        self.url(
            COMMENTS,
            &[
                ("code", code.as_str()),
                ("first", self.page_size.to_string().as_str()),
                ("after", after),
            ],
        )
    }

    /// Like action
    pub fn media_like(&self, media_id: u64) -> Result<Url> {
        self.url(MEDIA_LIKE, &[("media_id", media_id.to_string().as_str())])
    }

    /// Unlike action
    pub fn media_unlike(&self, media_id: u64) -> Result<Url> {
        self.url(MEDIA_UNLIKE, &[("media_id", media_id.to_string().as_str())])
    }

    /// Add comment action
    pub fn add_comment(&self, media_id: u64) -> Result<Url> {
        self.url(COMMENT_ADD, &[("media_id", media_id.to_string().as_str())])
    }

    /// Delete comment action
    pub fn delete_comment(&self, media_id: u64, comment_id: &str) -> Result<Url> {
        self.url(
            COMMENT_DELETE,
            &[("media_id", media_id.to_string().as_str()), ("comment_id", comment_id)],
        )
    }
}
