// src/api/responses.rs
//! Decodes raw Notion HTTP responses into typed values or errors.

use super::types::NotionErrorBody;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use reqwest::StatusCode;

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
}

/// Decodes a response body, mapping non-2xx statuses to `AppError::NotionService`.
pub fn decode_response<T>(response: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if response.status.is_success() {
        serde_json::from_str(&response.data).map_err(|e| {
            log::error!("Failed to parse response from {}: {}", response.url, e);
            AppError::MalformedResponse(format!("{} (body: {})", e, preview(&response.data)))
        })
    } else {
        Err(decode_error(&response))
    }
}

/// Maps an error response to the typed Notion error vocabulary.
fn decode_error(response: &ApiResponse<String>) -> AppError {
    match serde_json::from_str::<NotionErrorBody>(&response.data) {
        Ok(body) if !body.code.is_empty() => AppError::NotionService {
            code: NotionErrorCode::from_api_response(&body.code),
            message: body.message,
            status: response.status,
        },
        _ => AppError::NotionService {
            code: NotionErrorCode::from_http_status(response.status.as_u16()),
            message: format!("HTTP {} from {}", response.status, response.url),
            status: response.status,
        },
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
