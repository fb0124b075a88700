// tests/common/mod.rs
//! Shared fixtures: an in-memory Notion workspace and record builders.

#![allow(dead_code)]

use notion_blog::{
    AppError, BlockId, DatabaseId, NotionErrorCode, NotionRepository, PageId, PaginatedResponse,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub const DATABASE: &str = "d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0";

/// A Notion workspace held in memory.
///
/// Children and database rows are stored as pre-split pages so cursor
/// handling can be exercised; the cursor is the index of the next page.
#[derive(Default)]
pub struct InMemoryNotion {
    pages: HashMap<String, Value>,
    children: HashMap<String, Vec<Vec<Value>>>,
    rows: Vec<Vec<Value>>,
    failing: HashSet<String>,
    pub requests: Mutex<Vec<String>>,
}

impl InMemoryNotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, record: Value) -> Self {
        let id = record["id"].as_str().unwrap_or_default().to_string();
        self.pages.insert(id, record);
        self
    }

    pub fn children(self, parent: &str, records: Vec<Value>) -> Self {
        self.paged_children(parent, vec![records])
    }

    pub fn paged_children(mut self, parent: &str, pages: Vec<Vec<Value>>) -> Self {
        self.children.insert(parent.to_string(), pages);
        self
    }

    pub fn rows(mut self, pages: Vec<Vec<Value>>) -> Self {
        self.rows = pages;
        self
    }

    /// Every request touching `id` fails with a server error.
    pub fn failing(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record_request(&self, request: String, id: &str) -> Result<(), AppError> {
        self.requests.lock().unwrap().push(request);
        if self.failing.contains(id) {
            return Err(AppError::NotionService {
                code: NotionErrorCode::InternalError,
                message: format!("{} is broken", id),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(())
    }
}

fn page_at(pages: &[Vec<Value>], cursor: Option<String>) -> PaginatedResponse<Value> {
    let index: usize = cursor.and_then(|c| c.parse().ok()).unwrap_or(0);
    let has_more = index + 1 < pages.len();
    PaginatedResponse {
        results: pages.get(index).cloned().unwrap_or_default(),
        next_cursor: has_more.then(|| (index + 1).to_string()),
        has_more,
    }
}

#[async_trait::async_trait]
impl NotionRepository for InMemoryNotion {
    async fn retrieve_page(&self, id: &PageId) -> Result<Value, AppError> {
        self.record_request(format!("page {}", id), id.as_str())?;
        self.pages
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| AppError::NotionService {
                code: NotionErrorCode::ObjectNotFound,
                message: format!("Could not find page with ID: {}", id),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }

    async fn list_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Value>, AppError> {
        self.record_request(format!("children {}", parent), parent.as_str())?;
        let pages = self.children.get(parent.as_str()).cloned().unwrap_or_default();
        Ok(page_at(&pages, cursor))
    }

    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Value>, AppError> {
        self.record_request(format!("query {}", database), database.as_str())?;
        Ok(page_at(&self.rows, cursor))
    }
}

// --- Record builders ---

pub fn text(content: &str) -> Value {
    json!([{ "type": "text", "plain_text": content, "text": { "content": content, "link": null } }])
}

pub fn block(id: &str, kind: &str, body: Value, has_children: bool) -> Value {
    json!({
        "object": "block",
        "id": id,
        "type": kind,
        "has_children": has_children,
        kind: body
    })
}

pub fn paragraph(id: &str, content: &str, has_children: bool) -> Value {
    block(id, "paragraph", json!({ "rich_text": text(content) }), has_children)
}

pub fn post_page(id: &str, title: &str, status: &str, date: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "created_time": "2020-01-01T00:00:00.000Z",
        "cover": null,
        "properties": {
            "Title": { "type": "title", "title": text(title) },
            "Status": { "type": "status", "status": { "name": status } },
            "Date": { "type": "date", "date": { "start": date } },
            "Categories": { "type": "multi_select", "multi_select": [ { "name": "rust" } ] }
        }
    })
}
