use super::rich_text::StyledText;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Heading depth. Notion only offers three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
            HeadingLevel::Three => 3,
        }
    }

    /// The HTML element name for this level.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::One => "h1",
            HeadingLevel::Two => "h2",
            HeadingLevel::Three => "h3",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::One),
            2 => Ok(HeadingLevel::Two),
            3 => Ok(HeadingLevel::Three),
            other => Err(format!("heading level must be 1..=3, got {}", other)),
        }
    }
}

/// Which kind of list a list item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListType {
    Bulleted,
    Numbered,
}

/// Callout icon, resolved by the icon's own type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CalloutIcon {
    Emoji(String),
    External(String),
    File(String),
}

impl CalloutIcon {
    /// The emoji glyph, if this icon is one.
    pub fn emoji(&self) -> Option<&str> {
        match self {
            CalloutIcon::Emoji(emoji) => Some(emoji),
            CalloutIcon::External(_) | CalloutIcon::File(_) => None,
        }
    }
}

/// Paragraph block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub content: Vec<StyledText>,
    pub has_children: bool,
}

/// Heading block (levels 1-3)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingBlock {
    pub level: HeadingLevel,
    pub content: Vec<StyledText>,
    pub is_toggleable: bool,
}

/// Bulleted or numbered list item block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItemBlock {
    pub list_type: ListType,
    pub content: Vec<StyledText>,
    pub has_children: bool,
}

/// Quote block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBlock {
    pub content: Vec<StyledText>,
}

/// Code block. The body is kept as raw text, not styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub content: String,
    pub language: String,
    pub caption: Vec<StyledText>,
}

/// Callout block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutBlock {
    pub content: Vec<StyledText>,
    pub icon: Option<CalloutIcon>,
    pub color: String,
}

/// Image block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub url: String,
    pub caption: Vec<StyledText>,
}

/// Bookmark block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkBlock {
    pub url: String,
    pub caption: Vec<StyledText>,
}

/// Toggle block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleBlock {
    pub content: Vec<StyledText>,
    pub has_children: bool,
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoBlock {
    pub content: Vec<StyledText>,
    pub checked: bool,
    pub has_children: bool,
}

/// A normalized Notion block.
///
/// The variant tag fully determines which fields exist. Serialized with an
/// internal `type` tag, so a divider is exactly `{"type":"divider"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading(HeadingBlock),
    ListItem(ListItemBlock),
    Quote(QuoteBlock),
    Code(CodeBlock),
    Callout(CalloutBlock),
    Divider,
    Image(ImageBlock),
    Bookmark(BookmarkBlock),
    Toggle(ToggleBlock),
    ToDo(ToDoBlock),
}

impl Block {
    /// Get block type name
    pub fn block_type(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading(_) => "heading",
            Block::ListItem(_) => "list_item",
            Block::Quote(_) => "quote",
            Block::Code(_) => "code",
            Block::Callout(_) => "callout",
            Block::Divider => "divider",
            Block::Image(_) => "image",
            Block::Bookmark(_) => "bookmark",
            Block::Toggle(_) => "toggle",
            Block::ToDo(_) => "to_do",
        }
    }

    /// Whether the tree fetcher should descend into this block.
    ///
    /// Only paragraphs, list items, toggles and to-dos take children, and
    /// only when the source reported `has_children`. Every other variant is
    /// a leaf even if Notion says otherwise.
    pub fn expects_children(&self) -> bool {
        match self {
            Block::Paragraph(b) => b.has_children,
            Block::ListItem(b) => b.has_children,
            Block::Toggle(b) => b.has_children,
            Block::ToDo(b) => b.has_children,
            Block::Heading(_)
            | Block::Quote(_)
            | Block::Code(_)
            | Block::Callout(_)
            | Block::Divider
            | Block::Image(_)
            | Block::Bookmark(_) => false,
        }
    }

    /// Accept a visitor
    pub fn accept<V: BlockVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Block::Paragraph(b) => visitor.visit_paragraph(b),
            Block::Heading(b) => visitor.visit_heading(b),
            Block::ListItem(b) => visitor.visit_list_item(b),
            Block::Quote(b) => visitor.visit_quote(b),
            Block::Code(b) => visitor.visit_code(b),
            Block::Callout(b) => visitor.visit_callout(b),
            Block::Divider => visitor.visit_divider(),
            Block::Image(b) => visitor.visit_image(b),
            Block::Bookmark(b) => visitor.visit_bookmark(b),
            Block::Toggle(b) => visitor.visit_toggle(b),
            Block::ToDo(b) => visitor.visit_todo(b),
        }
    }
}

/// Visitor trait for traversing block structures.
///
/// There are no default methods: a new block variant must be handled by
/// every visitor before the crate compiles again.
pub trait BlockVisitor {
    type Output;

    fn visit_paragraph(&mut self, paragraph: &ParagraphBlock) -> Self::Output;
    fn visit_heading(&mut self, heading: &HeadingBlock) -> Self::Output;
    fn visit_list_item(&mut self, item: &ListItemBlock) -> Self::Output;
    fn visit_quote(&mut self, quote: &QuoteBlock) -> Self::Output;
    fn visit_code(&mut self, code: &CodeBlock) -> Self::Output;
    fn visit_callout(&mut self, callout: &CalloutBlock) -> Self::Output;
    fn visit_divider(&mut self) -> Self::Output;
    fn visit_image(&mut self, image: &ImageBlock) -> Self::Output;
    fn visit_bookmark(&mut self, bookmark: &BookmarkBlock) -> Self::Output;
    fn visit_toggle(&mut self, toggle: &ToggleBlock) -> Self::Output;
    fn visit_todo(&mut self, todo: &ToDoBlock) -> Self::Output;
}

/// A block in the fetched tree: the normalized block, its Notion id, and
/// the subtree it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    pub id: BlockId,
    pub block: Block,
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    /// A node without children, as produced by batch parsing.
    pub fn leaf(id: BlockId, block: Block) -> Self {
        Self {
            id,
            block,
            children: Vec::new(),
        }
    }

    /// Attach a fetched subtree.
    pub fn with_children(mut self, children: Vec<BlockNode>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_divider_serializes_to_bare_tag() {
        let value = serde_json::to_value(Block::Divider).unwrap();
        assert_eq!(value, json!({ "type": "divider" }));
        assert_eq!(value["type"], Block::Divider.block_type());
    }

    #[test]
    fn test_heading_level_serializes_as_number() {
        let block = Block::Heading(HeadingBlock {
            level: HeadingLevel::Two,
            content: vec![],
            is_toggleable: false,
        });
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["type"], "heading");
        assert_eq!(value["level"], 2);
        assert!(HeadingLevel::try_from(4).is_err());
    }

    #[test]
    fn test_only_nesting_variants_expect_children() {
        let paragraph = Block::Paragraph(ParagraphBlock {
            content: vec![],
            has_children: true,
        });
        let quote = Block::Quote(QuoteBlock { content: vec![] });
        let flat_todo = Block::ToDo(ToDoBlock {
            content: vec![],
            checked: false,
            has_children: false,
        });

        assert!(paragraph.expects_children());
        assert!(!quote.expects_children());
        assert!(!flat_todo.expects_children());
        assert!(!Block::Divider.expects_children());
    }
}
