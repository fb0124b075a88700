// src/api/client.rs
//! Thin HTTP client for the Notion API.
//!
//! Handles authentication and transport only. Responses are handed back as
//! raw JSON records; shaping them is the parsers' job.

use super::responses::{decode_response, ApiResponse};
use super::types::PaginatedResponse;
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;
use crate::types::{ApiKey, BlockId, DatabaseId, PageId};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::{json, Value};
use url::Url;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1/";

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: Url,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: Url::parse(API_BASE_URL)?,
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint with query parameters.
    pub async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Response, AppError> {
        let mut url = self.base_url.join(endpoint)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.base_url.join(endpoint)?;
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_page(&self, id: &PageId) -> Result<Value, AppError> {
        let endpoint = format!("pages/{}", id.to_dashed());
        let response = self.get(&endpoint, &[]).await?;
        decode_response(extract_response_text(response).await?)
    }

    async fn list_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Value>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_dashed());
        let page_size = NOTION_API_PAGE_SIZE.to_string();
        let mut query = vec![("page_size", page_size.as_str())];
        if let Some(cursor) = cursor.as_deref() {
            query.push(("start_cursor", cursor));
        }
        let response = self.get(&endpoint, &query).await?;
        decode_response(extract_response_text(response).await?)
    }

    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<Value>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_dashed());
        let mut body = json!({ "page_size": NOTION_API_PAGE_SIZE });
        if let Some(cursor) = cursor {
            body["start_cursor"] = json!(cursor);
        }
        let response = self.post(&endpoint, &body).await?;
        decode_response(extract_response_text(response).await?)
    }
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
