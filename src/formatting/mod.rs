// src/formatting/mod.rs
//! Renders the block model into HTML and assembles full pages.

pub mod block_renderer;
pub mod markup;
pub mod page;
mod rich_text;

pub use block_renderer::{render_blocks, render_blocks_html, render_node, HtmlBlockRenderer};
pub use markup::{Element, Markup};
pub use page::HtmlComposer;
pub use rich_text::{render_rich_text, render_span};
