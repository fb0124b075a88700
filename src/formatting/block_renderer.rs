// src/formatting/block_renderer.rs
//! Block rendering engine: converts a fetched block tree to markup.
//!
//! Each block is rendered by `HtmlBlockRenderer`, a `BlockVisitor`; the tree
//! walk in `render_node` appends a child group after any block that owns
//! children.

use super::markup::{external_link, Element, Markup};
use super::rich_text::render_rich_text;
use crate::constants::FALLBACK_CALLOUT_ICON;
use crate::model::{
    BlockNode, BlockVisitor, BookmarkBlock, CalloutBlock, CodeBlock, HeadingBlock, ImageBlock,
    ListItemBlock, ParagraphBlock, QuoteBlock, StyledText, ToDoBlock, ToggleBlock,
};

// --- Public API ---

/// Renders a block tree, in order, as sibling nodes.
pub fn render_blocks(nodes: &[BlockNode]) -> Markup {
    log::debug!("Rendering {} top-level blocks", nodes.len());
    let mut renderer = HtmlBlockRenderer;
    Markup::Fragment(
        nodes
            .iter()
            .map(|node| render_node(&mut renderer, node))
            .collect(),
    )
}

/// Renders a block tree straight to an HTML string.
pub fn render_blocks_html(nodes: &[BlockNode]) -> String {
    render_blocks(nodes).to_html()
}

/// Renders one node: its block, then its children in a `block-children`
/// group when it has any.
pub fn render_node(renderer: &mut HtmlBlockRenderer, node: &BlockNode) -> Markup {
    let block = node.block.accept(renderer);
    if node.children.is_empty() {
        return block;
    }

    let group = Element::new("div")
        .attr("class", "block-children")
        .children(node.children.iter().map(|child| render_node(renderer, child)));

    Markup::Fragment(vec![block, group.into()])
}

// --- Block Visitor ---

/// Renders one block, without its children, as HTML markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlBlockRenderer;

impl BlockVisitor for HtmlBlockRenderer {
    type Output = Markup;

    fn visit_paragraph(&mut self, paragraph: &ParagraphBlock) -> Markup {
        text_element("p", &paragraph.content).into()
    }

    fn visit_heading(&mut self, heading: &HeadingBlock) -> Markup {
        text_element(heading.level.tag(), &heading.content).into()
    }

    fn visit_list_item(&mut self, item: &ListItemBlock) -> Markup {
        text_element("li", &item.content).into()
    }

    fn visit_quote(&mut self, quote: &QuoteBlock) -> Markup {
        text_element("blockquote", &quote.content).into()
    }

    fn visit_code(&mut self, code: &CodeBlock) -> Markup {
        let code_element = Element::new("code")
            .attr("class", format!("language-{}", language_slug(&code.language)))
            .attr("data-language", code.language.as_str())
            .child(Markup::text(code.content.as_str()));
        let pre = Element::new("pre").child(code_element);

        with_caption(pre.into(), &code.caption, "p")
    }

    fn visit_callout(&mut self, callout: &CalloutBlock) -> Markup {
        let glyph = callout
            .icon
            .as_ref()
            .and_then(|icon| icon.emoji())
            .unwrap_or(FALLBACK_CALLOUT_ICON);

        Element::new("div")
            .attr("class", format!("callout callout-{}", callout.color))
            .child(
                Element::new("span")
                    .attr("class", "callout-icon")
                    .child(Markup::text(glyph)),
            )
            .child(
                Element::new("div")
                    .attr("class", "callout-content")
                    .child(render_rich_text(&callout.content)),
            )
            .into()
    }

    fn visit_divider(&mut self) -> Markup {
        Element::new("hr").into()
    }

    fn visit_image(&mut self, image: &ImageBlock) -> Markup {
        let mut figure = Element::new("figure").child(
            Element::new("img")
                .attr("src", image.url.as_str())
                .attr("alt", ""),
        );
        if !image.caption.is_empty() {
            figure = figure.child(text_element("figcaption", &image.caption));
        }
        figure.into()
    }

    fn visit_bookmark(&mut self, bookmark: &BookmarkBlock) -> Markup {
        let mut container = Element::new("div")
            .attr("class", "bookmark")
            .child(external_link(&bookmark.url, Markup::text(bookmark.url.as_str())));
        if !bookmark.caption.is_empty() {
            container = container.child(caption("p", &bookmark.caption));
        }
        container.into()
    }

    fn visit_toggle(&mut self, toggle: &ToggleBlock) -> Markup {
        Element::new("details")
            .child(text_element("summary", &toggle.content))
            .into()
    }

    fn visit_todo(&mut self, todo: &ToDoBlock) -> Markup {
        let mut checkbox = Element::new("input")
            .attr("type", "checkbox")
            .flag("disabled");
        if todo.checked {
            checkbox = checkbox.flag("checked");
        }

        let text = render_rich_text(&todo.content);
        let text = if todo.checked {
            text.wrap("s").into()
        } else {
            text
        };

        Element::new("div")
            .attr("class", "to-do")
            .child(checkbox)
            .child(Element::new("span").child(text))
            .into()
    }
}

// --- Helpers ---

fn text_element(tag: &'static str, spans: &[StyledText]) -> Element {
    Element::new(tag).child(render_rich_text(spans))
}

fn caption(tag: &'static str, spans: &[StyledText]) -> Element {
    text_element(tag, spans).attr("class", "caption")
}

fn with_caption(body: Markup, spans: &[StyledText], tag: &'static str) -> Markup {
    if spans.is_empty() {
        return body;
    }
    Markup::Fragment(vec![body, caption(tag, spans).into()])
}

/// Language names may contain spaces ("plain text"); class names may not.
fn language_slug(language: &str) -> String {
    language.split_whitespace().collect::<Vec<_>>().join("-")
}
