use super::block::BlockNode;
use crate::types::PageId;
use serde::{Deserialize, Serialize};

/// Metadata of one blog post, read from a Notion page's properties.
///
/// Every field has a default value; a missing Notion property is reported
/// as an empty string, `None`, or an empty list, never by a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub id: PageId,
    pub title: String,
    pub status: String,
    /// ISO-8601 date string, or empty when the page has none.
    pub created_date: String,
    pub series: Option<String>,
    /// Category names in the order Notion returned them.
    pub categories: Vec<String>,
    pub thumbnail: Option<String>,
}

impl PostMetadata {
    /// An empty post for the given page.
    pub fn untitled(id: PageId) -> Self {
        Self {
            id,
            title: String::new(),
            status: String::new(),
            created_date: String::new(),
            series: None,
            categories: Vec::new(),
            thumbnail: None,
        }
    }

    /// The publication date, if `created_date` holds a parseable date.
    pub fn published_on(&self) -> Option<chrono::NaiveDate> {
        let raw = self.created_date.as_str();
        if raw.is_empty() {
            return None;
        }
        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

/// A post together with its fetched block tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent {
    pub metadata: PostMetadata,
    pub blocks: Vec<BlockNode>,
}
