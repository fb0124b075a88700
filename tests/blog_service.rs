// tests/blog_service.rs
//! The blog service against an in-memory workspace.

mod common;

use common::{paragraph, post_page, InMemoryNotion, DATABASE};
use notion_blog::{
    AppError, BlogService, DatabaseId, HtmlComposer, PageComposer, PageId, PostSource,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const POST: &str = "0123456789abcdef0123456789abcdef";

fn service(notion: InMemoryNotion) -> BlogService {
    BlogService::new(Arc::new(notion), DatabaseId::from_api(DATABASE))
}

fn titles(posts: &[notion_blog::PostMetadata]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn test_post_content_combines_metadata_and_blocks() {
    let notion = InMemoryNotion::new()
        .page(post_page(POST, "Hello", "Published", "2024-05-01"))
        .children(POST, vec![paragraph("b1", "Body", false)]);

    let post = service(notion)
        .get_post_content(&PageId::from_api(POST))
        .await
        .unwrap();

    assert_eq!(post.metadata.title, "Hello");
    assert_eq!(post.metadata.categories, vec!["rust".to_string()]);
    assert_eq!(post.blocks.len(), 1);
    assert_eq!(post.blocks[0].id.as_str(), "b1");
}

#[tokio::test]
async fn test_missing_post_is_none() {
    let service = service(InMemoryNotion::new());

    assert_eq!(service.get_post(&PageId::from_api(POST)).await, None);
    assert_eq!(service.get_post_content(&PageId::from_api(POST)).await, None);

    let err = service.fetch_post(&PageId::from_api(POST)).await.unwrap_err();
    assert!(matches!(err, AppError::PostNotFound(_)));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_block_failure_degrades_to_empty_body() {
    let notion = InMemoryNotion::new()
        .page(post_page(POST, "Hello", "Published", "2024-05-01"))
        .children(POST, vec![paragraph("p", "Parent", true)])
        .failing("p");

    let post = service(notion)
        .get_post_content(&PageId::from_api(POST))
        .await
        .unwrap();

    assert_eq!(post.metadata.title, "Hello");
    assert!(post.blocks.is_empty());
}

#[tokio::test]
async fn test_list_posts_filters_and_sorts_newest_first() {
    let notion = InMemoryNotion::new().rows(vec![vec![
        post_page("a", "Older", "Published", "2023-01-15"),
        post_page("b", "Draft", "Draft", "2024-09-01"),
        post_page("c", "Newest", "Published", "2024-08-30T12:00:00.000+00:00"),
        post_page("d", "Middle", "Published", "2023-11-02"),
    ]]);

    let published = service(notion).with_published_status(Some("Published".to_string()));

    assert_eq!(
        titles(&published.list_posts().await),
        vec!["Newest", "Middle", "Older"]
    );
}

#[tokio::test]
async fn test_list_posts_reads_every_page_when_unlimited() {
    let pages = vec![
        vec![post_page("a", "First", "Published", "2024-01-01")],
        vec![post_page("b", "Second", "Published", "2024-02-01")],
    ];

    let single = service(InMemoryNotion::new().rows(pages.clone()));
    assert_eq!(titles(&single.list_posts().await), vec!["First"]);

    let all = service(InMemoryNotion::new().rows(pages)).with_page_limit(None);
    assert_eq!(titles(&all.list_posts().await), vec!["Second", "First"]);
}

#[tokio::test]
async fn test_failed_query_lists_nothing() {
    let notion = InMemoryNotion::new()
        .rows(vec![vec![post_page("a", "A", "Published", "2024-01-01")]])
        .failing(DATABASE);

    assert!(service(notion).list_posts().await.is_empty());
}

#[tokio::test]
async fn test_post_page_end_to_end() {
    let notion = InMemoryNotion::new()
        .page(post_page(POST, "Hello <World>", "Published", "2024-05-01"))
        .children(POST, vec![paragraph("b1", "Body & soul", false)]);
    let service = service(notion);
    let composer = HtmlComposer::new().unwrap();

    let post = service.fetch_post(&PageId::from_api(POST)).await.unwrap();
    let html = composer.compose_post(&post).unwrap();

    assert!(html.contains("<h1>Hello &lt;World&gt;</h1>"));
    assert!(html.contains("<p>Body &amp; soul</p>"));
    assert!(html.contains("May 1, 2024"));
}
