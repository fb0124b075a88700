// src/api/fetcher.rs
//! Block tree fetcher: assembles the nested block tree under a page.
//!
//! Children are listed, parsed, and descended into depth-first, one request
//! at a time. Only blocks whose variant takes children and whose record
//! reported `has_children` are expanded.

use super::blocks::parse_blocks;
use super::pagination::collect_pages;
use super::NotionRepository;
use crate::constants::{DEFAULT_CHILD_PAGE_LIMIT, NOTION_MAX_FETCH_DEPTH};
use crate::error::AppError;
use crate::model::BlockNode;
use crate::types::BlockId;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type TreeFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<BlockNode>, AppError>> + Send + 'a>>;

/// Fetches a block and all of its nestable descendants.
///
/// Strict: an error anywhere in the subtree fails the whole fetch. Callers
/// that prefer an empty page over an error decide that themselves.
pub struct BlockTreeFetcher {
    client: Arc<dyn NotionRepository>,
    max_child_pages: Option<u32>,
}

impl BlockTreeFetcher {
    /// Creates a fetcher that reads one page of children per parent.
    pub fn new(client: Arc<dyn NotionRepository>) -> Self {
        Self {
            client,
            max_child_pages: Some(DEFAULT_CHILD_PAGE_LIMIT),
        }
    }

    /// Sets how many pages of children are read per parent; `None` follows
    /// the cursor until Notion reports no more.
    pub fn with_child_page_limit(mut self, max_child_pages: Option<u32>) -> Self {
        self.max_child_pages = max_child_pages;
        self
    }

    /// Fetches the block tree rooted at `root`.
    pub async fn fetch_tree(&self, root: &BlockId) -> Result<Vec<BlockNode>, AppError> {
        log::debug!("Fetching block tree under {}", root);
        let tree = self.fetch_level(root, 0).await?;
        log::debug!("Fetched {} blocks under {}", count_nodes(&tree), root);
        Ok(tree)
    }

    fn fetch_level<'a>(&'a self, parent: &'a BlockId, depth: usize) -> TreeFuture<'a> {
        Box::pin(async move {
            if depth > NOTION_MAX_FETCH_DEPTH {
                return Err(AppError::RecursionLimitExceeded(NOTION_MAX_FETCH_DEPTH));
            }

            let records = self.list_children(parent).await?;
            let stubs = parse_blocks(&records);

            let mut nodes = Vec::with_capacity(stubs.len());
            for node in stubs {
                if node.block.expects_children() && node.id.as_str().is_empty() {
                    log::debug!(
                        "Not descending into {} block without an id under {}",
                        node.block.block_type(),
                        parent
                    );
                    nodes.push(node);
                } else if node.block.expects_children() {
                    let children = self.fetch_level(&node.id, depth + 1).await?;
                    nodes.push(node.with_children(children));
                } else {
                    nodes.push(node);
                }
            }
            Ok(nodes)
        })
    }

    async fn list_children(&self, parent: &BlockId) -> Result<Vec<Value>, AppError> {
        let client = &*self.client;
        collect_pages(
            move |cursor| client.list_children(parent, cursor),
            self.max_child_pages,
        )
        .await
    }
}

/// Counts every node in a tree.
pub fn count_nodes(nodes: &[BlockNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}
