// src/formatting/rich_text/mod.rs
//! Renders styled text spans as markup.

mod annotations;

pub use annotations::apply_annotations;

use super::markup::{external_link, Markup};
use crate::model::StyledText;

/// Renders a span sequence as sibling nodes.
pub fn render_rich_text(spans: &[StyledText]) -> Markup {
    Markup::Fragment(spans.iter().map(render_span).collect())
}

/// Renders one span: styles first, then the link around everything.
pub fn render_span(span: &StyledText) -> Markup {
    let styled = apply_annotations(Markup::text(&span.content), &span.annotations);

    match &span.link {
        Some(url) => external_link(url, styled).into(),
        None => styled,
    }
}
