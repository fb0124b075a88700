// src/pipeline.rs
//! Pipeline capability traits: the three stages of rendering a blog page.
//!
//! Each trait describes a single capability, so each stage can be tested
//! in isolation.

use crate::blog::BlogService;
use crate::error::AppError;
use crate::formatting::HtmlComposer;
use crate::model::{PostContent, PostMetadata};
use crate::output::OutputReport;
use crate::types::PageId;

/// Retrieves posts.
#[async_trait::async_trait]
pub trait PostSource {
    /// One post with its blocks; `PostNotFound` when there is none.
    async fn fetch_post(&self, id: &PageId) -> Result<PostContent, AppError>;

    /// The posts to show on the index page, in display order.
    async fn fetch_index(&self) -> Result<Vec<PostMetadata>, AppError>;
}

/// Turns posts into HTML documents.
pub trait PageComposer {
    fn compose_post(&self, post: &PostContent) -> Result<String, AppError>;
    fn compose_index(&self, posts: &[PostMetadata]) -> Result<String, AppError>;
}

/// Delivers a rendered document to its destinations.
pub trait PageDelivery {
    fn deliver(&self, document: String) -> Result<OutputReport, AppError>;
}

#[async_trait::async_trait]
impl PostSource for BlogService {
    async fn fetch_post(&self, id: &PageId) -> Result<PostContent, AppError> {
        self.get_post_content(id)
            .await
            .ok_or_else(|| AppError::PostNotFound(id.to_string()))
    }

    async fn fetch_index(&self) -> Result<Vec<PostMetadata>, AppError> {
        Ok(self.list_posts().await)
    }
}

impl PageComposer for HtmlComposer {
    fn compose_post(&self, post: &PostContent) -> Result<String, AppError> {
        self.compose_post_page(post)
    }

    fn compose_index(&self, posts: &[PostMetadata]) -> Result<String, AppError> {
        self.compose_index_page(posts)
    }
}
