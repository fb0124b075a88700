// src/config.rs
use crate::constants::DEFAULT_PUBLISHED_STATUS;
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, PageId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable holding the Notion integration token.
pub const API_KEY_VAR: &str = "NOTION_API_KEY";
/// Environment variable holding the id of the posts database.
pub const DATABASE_ID_VAR: &str = "NOTION_DATABASE_ID";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Render a Notion-backed blog as HTML", long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: BlogCommand,

    /// Write the page to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output_file: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Follow pagination cursors instead of reading a single page of results
    #[arg(long, global = true, default_value_t = false)]
    pub all_pages: bool,

    /// Status a post must have to be listed
    #[arg(long, global = true, default_value = DEFAULT_PUBLISHED_STATUS)]
    pub status: String,

    /// List posts of every status
    #[arg(long, global = true, default_value_t = false)]
    pub include_drafts: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BlogCommand {
    /// Render one post
    Post {
        /// Notion page URL or ID
        id: String,
    },
    /// Render the index of posts
    List,
}

/// What the binary was asked to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    Post(PageId),
    Index,
}

/// Validated Notion credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: ApiKey,
    pub database_id: DatabaseId,
}

impl Credentials {
    /// Validates raw credential values.
    ///
    /// Returns `None`, with a warning logged, when either value is missing or
    /// invalid; the blog then runs unconfigured.
    pub fn from_values(api_key: Option<String>, database_id: Option<String>) -> Option<Self> {
        let (Some(api_key), Some(database_id)) = (api_key, database_id) else {
            log::warn!(
                "{} and {} must both be set to read from Notion",
                API_KEY_VAR,
                DATABASE_ID_VAR
            );
            return None;
        };

        let api_key = ApiKey::new(api_key)
            .map_err(|e| log::warn!("Ignoring {}: {}", API_KEY_VAR, e))
            .ok()?;
        let database_id = DatabaseId::parse(&database_id)
            .map_err(|e| log::warn!("Ignoring {}: {}", DATABASE_ID_VAR, e))
            .ok()?;

        Some(Self {
            api_key,
            database_id,
        })
    }

    /// Reads credentials from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(DATABASE_ID_VAR).ok(),
        )
    }
}

/// Resolved configuration for one run of the binary.
#[derive(Debug, Clone)]
pub struct BlogConfig {
    pub request: PageRequest,
    pub credentials: Option<Credentials>,
    /// `None` lists posts of every status.
    pub published_status: Option<String>,
    /// `None` follows every pagination cursor.
    pub max_child_pages: Option<u32>,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
}

impl BlogConfig {
    /// Resolves configuration from CLI input and the environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::from_parts(cli, Credentials::from_env())
    }

    /// Resolves configuration from CLI input and already-read credentials.
    pub fn from_parts(
        cli: CommandLineInput,
        credentials: Option<Credentials>,
    ) -> Result<Self, AppError> {
        let request = match &cli.command {
            BlogCommand::Post { id } => PageRequest::Post(PageId::parse(id)?),
            BlogCommand::List => PageRequest::Index,
        };

        Ok(BlogConfig {
            request,
            credentials,
            published_status: (!cli.include_drafts).then_some(cli.status),
            max_child_pages: if cli.all_pages {
                None
            } else {
                Some(crate::constants::DEFAULT_CHILD_PAGE_LIMIT)
            },
            output_file: cli.output_file.map(PathBuf::from),
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "secret_abcdefghijklmnopqrstuvwxyz";
    const DATABASE: &str = "1234567890abcdef1234567890abcdef";

    fn parse(args: &[&str]) -> CommandLineInput {
        CommandLineInput::parse_from(std::iter::once("notion-blog").chain(args.iter().copied()))
    }

    #[test]
    fn test_post_command_defaults() {
        let config = BlogConfig::from_parts(parse(&["post", DATABASE]), None).unwrap();

        assert_eq!(config.request, PageRequest::Post(PageId::parse(DATABASE).unwrap()));
        assert_eq!(config.published_status.as_deref(), Some("Published"));
        assert_eq!(config.max_child_pages, Some(1));
        assert_eq!(config.output_file, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_list_command_flags() {
        let cli = parse(&["list", "--all-pages", "--include-drafts", "-o", "index.html", "-v"]);
        let config = BlogConfig::from_parts(cli, None).unwrap();

        assert_eq!(config.request, PageRequest::Index);
        assert_eq!(config.published_status, None);
        assert_eq!(config.max_child_pages, None);
        assert_eq!(config.output_file, Some(PathBuf::from("index.html")));
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_post_id_is_rejected() {
        let result = BlogConfig::from_parts(parse(&["post", "not-an-id"]), None);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_credentials_require_both_values() {
        assert!(Credentials::from_values(Some(KEY.into()), Some(DATABASE.into())).is_some());
        assert!(Credentials::from_values(None, Some(DATABASE.into())).is_none());
        assert!(Credentials::from_values(Some(KEY.into()), None).is_none());
        assert!(Credentials::from_values(Some("bogus".into()), Some(DATABASE.into())).is_none());
        assert!(Credentials::from_values(Some(KEY.into()), Some("zzz".into())).is_none());
    }
}
