// src/api/mod.rs
//! Notion API interaction: reading posts and their block trees.
//!
//! I/O lives in `client`; everything that turns raw JSON into the domain
//! model (`rich_text`, `blocks`, `properties`) is pure and total.

pub mod blocks;
pub mod client;
pub mod fetcher;
pub mod fields;
mod pagination;
pub mod properties;
mod responses;
pub mod rich_text;
mod types;

use crate::error::AppError;
use crate::types::{BlockId, DatabaseId, PageId};
use serde_json::Value;

/// The ability to read raw records from a Notion workspace.
///
/// Business logic depends on this trait, never on HTTP details. Records are
/// returned untyped; the parsers decide what a record means.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Retrieves a single page record with its properties.
    async fn retrieve_page(&self, id: &PageId) -> Result<Value, AppError>;

    /// Lists one page of the children of a block (or page).
    async fn list_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Value>, AppError>;

    /// Queries one page of the rows of a database.
    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Value>, AppError>;
}

// Re-export the public interface
pub use blocks::{parse_block, parse_blocks};
pub use client::NotionHttpClient;
pub use fetcher::{count_nodes, BlockTreeFetcher};
pub use pagination::collect_pages;
pub use properties::parse_post_metadata;
pub use responses::{decode_response, ApiResponse};
pub use rich_text::normalize_rich_text;
pub use types::{NotionErrorBody, PaginatedResponse};
