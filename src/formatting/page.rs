// src/formatting/page.rs
//! Composes full HTML documents from posts through Handlebars templates.

use super::block_renderer::render_blocks_html;
use crate::error::AppError;
use crate::model::{PostContent, PostMetadata};
use handlebars::Handlebars;
use serde::Serialize;

const POST_TEMPLATE: &str = "post";
const INDEX_TEMPLATE: &str = "index";
const UNTITLED: &str = "Untitled";

/// Renders post and index pages. Templates are compiled into the binary.
pub struct HtmlComposer {
    templates: Handlebars<'static>,
}

impl HtmlComposer {
    pub fn new() -> Result<Self, AppError> {
        let mut templates = Handlebars::new();
        register(
            &mut templates,
            POST_TEMPLATE,
            include_str!("../../templates/post.hbs"),
        )?;
        register(
            &mut templates,
            INDEX_TEMPLATE,
            include_str!("../../templates/index.hbs"),
        )?;
        Ok(Self { templates })
    }

    /// Renders one post with its block tree as the page body.
    pub fn compose_post_page(&self, post: &PostContent) -> Result<String, AppError> {
        let body = render_blocks_html(&post.blocks);
        log::debug!(
            "Rendered {} bytes of block HTML for post {}",
            body.len(),
            post.metadata.id
        );

        let view = PostView {
            summary: PostSummary::from(&post.metadata),
            thumbnail: post.metadata.thumbnail.as_deref(),
            categories: &post.metadata.categories,
            body,
        };
        self.render(POST_TEMPLATE, &view)
    }

    /// Renders the list of posts, in the order given.
    pub fn compose_index_page(&self, posts: &[PostMetadata]) -> Result<String, AppError> {
        let view = IndexView {
            posts: posts.iter().map(PostSummary::from).collect(),
        };
        self.render(INDEX_TEMPLATE, &view)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, AppError> {
        self.templates
            .render(name, data)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}

fn register(
    templates: &mut Handlebars<'static>,
    name: &str,
    source: &str,
) -> Result<(), AppError> {
    templates
        .register_template_string(name, source)
        .map_err(|e| AppError::TemplateRenderError {
            name: name.to_string(),
            message: e.to_string(),
        })
}

// --- Template data ---

#[derive(Serialize)]
struct PostSummary<'a> {
    id: String,
    title: &'a str,
    created_date: &'a str,
    display_date: Option<String>,
    series: Option<&'a str>,
}

impl<'a> From<&'a PostMetadata> for PostSummary<'a> {
    fn from(post: &'a PostMetadata) -> Self {
        let title = if post.title.trim().is_empty() {
            UNTITLED
        } else {
            post.title.as_str()
        };
        Self {
            id: post.id.to_string(),
            title,
            created_date: &post.created_date,
            display_date: display_date(post),
            series: post.series.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct PostView<'a> {
    #[serde(flatten)]
    summary: PostSummary<'a>,
    thumbnail: Option<&'a str>,
    categories: &'a [String],
    body: String,
}

#[derive(Serialize)]
struct IndexView<'a> {
    posts: Vec<PostSummary<'a>>,
}

/// Human-readable date, e.g. "March 9, 2024". Unparseable dates are shown
/// as stored; an empty date shows nothing.
fn display_date(post: &PostMetadata) -> Option<String> {
    match post.published_on() {
        Some(date) => Some(date.format("%B %-d, %Y").to_string()),
        None if post.created_date.is_empty() => None,
        None => Some(post.created_date.clone()),
    }
}
