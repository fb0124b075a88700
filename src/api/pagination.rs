// src/api/pagination.rs
//! Cursor-following pagination over async page fetches.

use super::types::PaginatedResponse;
use crate::error::AppError;

/// Collects items from successive pages until the source reports no more
/// or `max_pages` pages have been read.
///
/// `None` for `max_pages` means follow the cursor to the end.
pub async fn collect_pages<T, F, Fut>(
    mut fetch_page: F,
    max_pages: Option<u32>,
) -> Result<Vec<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        if let Some(max) = max_pages {
            if pages_fetched >= max {
                log::debug!("Reached page limit ({}), not following cursor", max);
                break;
            }
        }

        let response = fetch_page(cursor).await?;

        pages_fetched += 1;
        cursor = response.next_cursor;
        all_items.extend(response.results);

        if !response.has_more || cursor.is_none() {
            break;
        }
    }

    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{ready, Ready};

    type PageResult = Result<PaginatedResponse<u32>, AppError>;

    /// Serves `pages` in order, handing out the index of the next page as cursor.
    fn paged(pages: Vec<Vec<u32>>) -> impl FnMut(Option<String>) -> Ready<PageResult> {
        move |cursor| {
            let index: usize = cursor.map(|c| c.parse().unwrap()).unwrap_or(0);
            let has_more = index + 1 < pages.len();
            ready(Ok(PaginatedResponse {
                results: pages[index].clone(),
                next_cursor: has_more.then(|| (index + 1).to_string()),
                has_more,
            }))
        }
    }

    #[tokio::test]
    async fn test_stops_at_page_limit() {
        let items = collect_pages(paged(vec![vec![1, 2], vec![3], vec![4]]), Some(1))
            .await
            .unwrap();
        assert_eq!(items, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_follows_cursor_when_unbounded() {
        let items = collect_pages(paged(vec![vec![1, 2], vec![3], vec![4]]), None)
            .await
            .unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_propagates_errors() {
        let failing = |_| -> Ready<PageResult> {
            ready(Err(AppError::MalformedResponse("boom".into())))
        };
        let result = collect_pages(failing, None).await;
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }
}
