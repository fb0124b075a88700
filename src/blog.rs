// src/blog.rs
//! The blog service: the one place where Notion failures turn into
//! "nothing to show".
//!
//! Every method here is infallible. Missing configuration, API errors and
//! malformed trees all degrade to `None` or an empty list, and are logged.

use crate::api::{
    collect_pages, parse_post_metadata, BlockTreeFetcher, NotionHttpClient, NotionRepository,
};
use crate::config::Credentials;
use crate::constants::DEFAULT_CHILD_PAGE_LIMIT;
use crate::error::AppError;
use crate::model::{BlockNode, PostContent, PostMetadata};
use crate::types::{BlockId, DatabaseId, PageId};
use std::sync::Arc;

/// The Notion workspace a configured service reads from.
#[derive(Clone)]
struct Backend {
    client: Arc<dyn NotionRepository>,
    database: DatabaseId,
}

/// Reads posts from Notion on behalf of the page layer.
#[derive(Clone)]
pub struct BlogService {
    backend: Option<Backend>,
    published_status: Option<String>,
    page_limit: Option<u32>,
}

impl BlogService {
    /// A service backed by `client`, listing posts from `database`.
    pub fn new(client: Arc<dyn NotionRepository>, database: DatabaseId) -> Self {
        Self {
            backend: Some(Backend { client, database }),
            published_status: None,
            page_limit: Some(DEFAULT_CHILD_PAGE_LIMIT),
        }
    }

    /// A service with no backend. Every read returns nothing.
    pub fn unconfigured() -> Self {
        Self {
            backend: None,
            published_status: None,
            page_limit: Some(DEFAULT_CHILD_PAGE_LIMIT),
        }
    }

    /// Builds a service talking to the Notion HTTP API, or an unconfigured
    /// one when no credentials were resolved.
    pub fn connect(credentials: Option<&Credentials>) -> Result<Self, AppError> {
        match credentials {
            Some(credentials) => {
                let client = NotionHttpClient::new(&credentials.api_key)?;
                log::info!("Reading posts from database {}", credentials.database_id);
                Ok(Self::new(Arc::new(client), credentials.database_id.clone()))
            }
            None => {
                log::info!("Running without a Notion backend");
                Ok(Self::unconfigured())
            }
        }
    }

    /// Only list posts whose status equals `status`; `None` lists all.
    pub fn with_published_status(mut self, status: Option<String>) -> Self {
        self.published_status = status;
        self
    }

    /// How many API pages are read per listing; `None` reads all of them.
    pub fn with_page_limit(mut self, page_limit: Option<u32>) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Metadata of one post, or `None` if unconfigured or the fetch failed.
    pub async fn get_post(&self, id: &PageId) -> Option<PostMetadata> {
        let backend = self.backend.as_ref()?;

        match backend.client.retrieve_page(id).await {
            Ok(page) => Some(parse_post_metadata(&page)),
            Err(e) if e.is_not_found() => {
                log::warn!("Post {} not found", id);
                None
            }
            Err(e) => {
                log::error!("Failed to fetch post {}: {}", id, e);
                None
            }
        }
    }

    /// The block tree of a post, or an empty tree if anything failed.
    pub async fn get_post_blocks(&self, id: &BlockId) -> Vec<BlockNode> {
        let Some(backend) = self.backend.as_ref() else {
            return Vec::new();
        };

        let fetcher =
            BlockTreeFetcher::new(backend.client.clone()).with_child_page_limit(self.page_limit);
        match fetcher.fetch_tree(id).await {
            Ok(tree) => tree,
            Err(e) => {
                log::error!("Failed to fetch blocks of {}: {}", id, e);
                Vec::new()
            }
        }
    }

    /// Metadata and blocks of a post, fetched concurrently.
    ///
    /// `None` means the post could not be found; a post whose blocks failed
    /// to load is still returned, with no blocks.
    pub async fn get_post_content(&self, id: &PageId) -> Option<PostContent> {
        let root: BlockId = id.retag();
        let (metadata, blocks) = tokio::join!(self.get_post(id), self.get_post_blocks(&root));

        Some(PostContent {
            metadata: metadata?,
            blocks,
        })
    }

    /// Posts in the database, newest first. Undated posts come last.
    pub async fn list_posts(&self) -> Vec<PostMetadata> {
        let Some(backend) = self.backend.as_ref() else {
            return Vec::new();
        };

        let client = &*backend.client;
        let database = &backend.database;
        let records = match collect_pages(
            move |cursor| client.query_database(database, cursor),
            self.page_limit,
        )
        .await
        {
            Ok(records) => records,
            Err(e) => {
                log::error!("Failed to query database {}: {}", database, e);
                return Vec::new();
            }
        };

        let mut posts: Vec<PostMetadata> = records.iter().map(parse_post_metadata).collect();
        if let Some(status) = &self.published_status {
            posts.retain(|post| &post.status == status);
        }
        sort_newest_first(&mut posts);

        log::debug!("Listing {} of {} posts", posts.len(), records.len());
        posts
    }
}

/// Stable sort by publication date, descending; unparseable dates last.
fn sort_newest_first(posts: &mut [PostMetadata]) {
    posts.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(id: &str, date: &str) -> PostMetadata {
        PostMetadata {
            created_date: date.to_string(),
            ..PostMetadata::untitled(PageId::from_api(id))
        }
    }

    #[test]
    fn test_sort_newest_first_with_undated_last() {
        let mut posts = vec![
            dated("old", "2022-01-01"),
            dated("none", ""),
            dated("new", "2024-06-01T08:00:00.000Z"),
            dated("junk", "yesterday"),
            dated("mid", "2023-05-05"),
        ];

        sort_newest_first(&mut posts);

        let order: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["new", "mid", "old", "none", "junk"]);
    }

    #[tokio::test]
    async fn test_unconfigured_service_returns_nothing() {
        let service = BlogService::unconfigured();

        assert!(!service.is_configured());
        assert_eq!(service.get_post(&PageId::from_api("p")).await, None);
        assert!(service
            .get_post_blocks(&BlockId::from_api("p"))
            .await
            .is_empty());
        assert_eq!(service.get_post_content(&PageId::from_api("p")).await, None);
        assert!(service.list_posts().await.is_empty());
    }

    #[test]
    fn test_connect_without_credentials() {
        let service = BlogService::connect(None).unwrap();
        assert!(!service.is_configured());
    }
}
