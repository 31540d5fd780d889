//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::client::Instagram;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{media_code_from_id, media_id_from_code};
use crate::pagination::Cursor;
use crate::types::{LocationId, MediaCode, TagName, UserId, Username};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        if let Commands::Code { value } = &self.cli.command {
            return self.convert_code(value);
        }

        let config = self.load_config()?;
        let ig = Instagram::from_config(&config)?;

        if self.cli.login || self.cli.command.requires_login() {
            ig.base_page().await?;
            ig.login(&config.credentials).await?;
        }

        match &self.cli.command {
            Commands::Account { username } => {
                let account = ig
                    .get_account_by_username(&Username::new(username.as_str()))
                    .await?;
                self.output(&account)
            }
            Commands::AccountById { id } => {
                let account = ig.get_account_by_id(UserId(*id)).await?;
                self.output(&account)
            }
            Commands::Medias { username, pages } => {
                let username = Username::new(username.as_str());
                let medias = match start_cursor(pages) {
                    Some(cursor) => ig.get_medias_after(&username, pages.pages, cursor).await?,
                    None => ig.get_medias(&username, pages.pages).await?,
                };
                self.output(&medias)
            }
            Commands::Media { code_or_url } => {
                let is_url =
                    code_or_url.starts_with("http://") || code_or_url.starts_with("https://");
                let media = if is_url {
                    ig.get_media_by_url(code_or_url).await?
                } else {
                    ig.get_media_by_code(&MediaCode::new(code_or_url.as_str()))
                        .await?
                };
                self.output(&media)
            }
            Commands::Tag { name } => {
                let tag = ig.get_tag_by_name(&TagName::new(name.as_str())).await?;
                self.output(&tag)
            }
            Commands::TagMedias { name, pages } => {
                let name = TagName::new(name.as_str());
                let tag = match start_cursor(pages) {
                    Some(cursor) => {
                        ig.get_medias_by_tag_after(&name, pages.pages, cursor)
                            .await?
                    }
                    None => ig.get_medias_by_tag(&name, pages.pages).await?,
                };
                self.output(&tag)
            }
            Commands::LocationMedias { id, pages } => {
                let id = LocationId::new(id.as_str());
                let location = match start_cursor(pages) {
                    Some(cursor) => {
                        ig.get_location_medias_by_id_after(&id, pages.pages, cursor)
                            .await?
                    }
                    None => ig.get_location_medias_by_id(&id, pages.pages).await?,
                };
                self.output(&location)
            }
            Commands::Comments { code, pages } => {
                let code = MediaCode::new(code.as_str());
                let comments = match start_cursor(pages) {
                    Some(cursor) => {
                        ig.get_comments_by_media_code_after(&code, pages.pages, cursor)
                            .await?
                    }
                    None => ig.get_comments_by_media_code(&code, pages.pages).await?,
                };
                self.output(&comments)
            }
            Commands::Followers { id, pages } => {
                let id = UserId(*id);
                let followers = match start_cursor(pages) {
                    Some(cursor) => ig.get_followers_after(id, pages.pages, cursor).await?,
                    None => ig.get_followers(id, pages.pages).await?,
                };
                self.output(&followers)
            }
            Commands::Follows { id, pages } => {
                let id = UserId(*id);
                let follows = match start_cursor(pages) {
                    Some(cursor) => ig.get_follows_after(id, pages.pages, cursor).await?,
                    None => ig.get_follows(id, pages.pages).await?,
                };
                self.output(&follows)
            }
            Commands::Like { code } => {
                ig.like_media_by_code(&MediaCode::new(code.as_str())).await?;
                self.output(&json!({ "status": "ok" }))
            }
            Commands::Unlike { code } => {
                ig.unlike_media_by_code(&MediaCode::new(code.as_str())).await?;
                self.output(&json!({ "status": "ok" }))
            }
            Commands::Comment { code, text } => {
                let response = ig
                    .add_media_comment(&MediaCode::new(code.as_str()), text)
                    .await?;
                self.output(&response)
            }
            Commands::DeleteComment { code, comment_id } => {
                ig.delete_media_comment(&MediaCode::new(code.as_str()), comment_id)
                    .await?;
                self.output(&json!({ "status": "ok" }))
            }
            Commands::Code { value } => self.convert_code(value),
        }
    }

    /// Load the config file if given, then apply command-line credentials
    fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => {
                info!("Loading config from {}", path.display());
                ClientConfig::from_file(path)?
            }
            None => ClientConfig::default(),
        };
        Ok(config.with_credentials(self.cli.username.clone(), self.cli.password.clone()))
    }

    /// Numeric id for a shortcode, or shortcode for a numeric id
    fn convert_code(&self, value: &str) -> Result<()> {
        let (code, id) = match value.parse::<u64>() {
            Ok(id) => (media_code_from_id(id), id),
            Err(_) => {
                let code = MediaCode::new(value);
                let id = media_id_from_code(&code)?;
                (code, id)
            }
        };
        debug!("Converted {value}: code={code} id={id}");
        self.output(&json!({ "code": code, "id": id }))
    }

    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", render(value, self.cli.format)?);
        Ok(())
    }
}

fn start_cursor(pages: &PageArgs) -> Option<Cursor> {
    pages
        .after
        .as_ref()
        .map(|token| Cursor::new(true, token.as_str()))
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    })
}
