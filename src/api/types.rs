// src/api/types.rs
//! Wire types shared by the Notion client and its callers.

use serde::Deserialize;

/// One page of a cursor-paginated Notion list response.
///
/// Every field defaults so a sparse or truncated body still yields a
/// usable (possibly empty) page instead of an error.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// A single, final page holding `results`.
    pub fn last_page(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
            has_more: false,
        }
    }
}

/// Error body returned by the Notion API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
