// src/api/blocks.rs
//! Block parser: turns raw Notion block records into normalized blocks.
//!
//! A record carries a `type` discriminator and a same-named object with the
//! type-specific fields. Unknown types, and images without a usable URL,
//! produce no block at all; that is expected heterogeneity, not an error.

use super::fields::{bool_or, field, file_url, str_at, string_or};
use super::rich_text::normalize_rich_text;
use crate::constants::{DEFAULT_CODE_LANGUAGE, DEFAULT_COLOR};
use crate::model::{
    plain_text, Block, BlockNode, BookmarkBlock, CalloutBlock, CalloutIcon, CodeBlock,
    HeadingBlock, HeadingLevel, ImageBlock, ListItemBlock, ListType, ParagraphBlock, QuoteBlock,
    ToDoBlock, ToggleBlock,
};
use crate::types::BlockId;
use serde_json::Value;

static MISSING: Value = Value::Null;

/// Parses a single block record.
///
/// Returns `None` for unrecognized types and for images whose URL cannot be
/// resolved.
pub fn parse_block(record: &Value) -> Option<Block> {
    let block_type = str_at(record, &["type"])?;
    let body = record.get(block_type).unwrap_or(&MISSING);
    let has_children = bool_or(record, &["has_children"], false);
    let content = || normalize_rich_text(body.get("rich_text"));

    let block = match block_type {
        "paragraph" => Block::Paragraph(ParagraphBlock {
            content: content(),
            has_children,
        }),
        "heading_1" => heading(HeadingLevel::One, body),
        "heading_2" => heading(HeadingLevel::Two, body),
        "heading_3" => heading(HeadingLevel::Three, body),
        "bulleted_list_item" => list_item(ListType::Bulleted, body, has_children),
        "numbered_list_item" => list_item(ListType::Numbered, body, has_children),
        "quote" => Block::Quote(QuoteBlock { content: content() }),
        "code" => Block::Code(CodeBlock {
            content: plain_text(&content()),
            language: string_or(body, &["language"], DEFAULT_CODE_LANGUAGE),
            caption: normalize_rich_text(body.get("caption")),
        }),
        "callout" => Block::Callout(CalloutBlock {
            content: content(),
            icon: body.get("icon").and_then(callout_icon),
            color: string_or(body, &["color"], DEFAULT_COLOR),
        }),
        "divider" => Block::Divider,
        "image" => {
            let Some(url) = file_url(body) else {
                log::debug!("Dropping image block without a resolvable URL");
                return None;
            };
            Block::Image(ImageBlock {
                url,
                caption: normalize_rich_text(body.get("caption")),
            })
        }
        "bookmark" => Block::Bookmark(BookmarkBlock {
            url: string_or(body, &["url"], ""),
            caption: normalize_rich_text(body.get("caption")),
        }),
        "toggle" => Block::Toggle(ToggleBlock {
            content: content(),
            has_children,
        }),
        "to_do" => Block::ToDo(ToDoBlock {
            content: content(),
            checked: bool_or(body, &["checked"], false),
            has_children,
        }),
        other => {
            log::debug!("Skipping unsupported block type '{}'", other);
            return None;
        }
    };

    Some(block)
}

/// Parses a batch of block records into childless nodes.
///
/// Records that produce no block are dropped without leaving a gap; the
/// survivors keep their relative order.
pub fn parse_blocks(records: &[Value]) -> Vec<BlockNode> {
    records
        .iter()
        .filter_map(|record| {
            let block = parse_block(record)?;
            let id = BlockId::from_api(string_or(record, &["id"], ""));
            Some(BlockNode::leaf(id, block))
        })
        .collect()
}

fn heading(level: HeadingLevel, body: &Value) -> Block {
    Block::Heading(HeadingBlock {
        level,
        content: normalize_rich_text(body.get("rich_text")),
        is_toggleable: bool_or(body, &["is_toggleable"], false),
    })
}

fn list_item(list_type: ListType, body: &Value, has_children: bool) -> Block {
    Block::ListItem(ListItemBlock {
        list_type,
        content: normalize_rich_text(body.get("rich_text")),
        has_children,
    })
}

/// Resolves a callout icon by its own type tag.
fn callout_icon(icon: &Value) -> Option<CalloutIcon> {
    match str_at(icon, &["type"])? {
        "emoji" => str_at(icon, &["emoji"]).map(|e| CalloutIcon::Emoji(e.to_string())),
        "external" => field(icon, &["external", "url"])
            .and_then(Value::as_str)
            .map(|url| CalloutIcon::External(url.to_string())),
        "file" => field(icon, &["file", "url"])
            .and_then(Value::as_str)
            .map(|url| CalloutIcon::File(url.to_string())),
        _ => None,
    }
}
