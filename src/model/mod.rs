mod block;
mod post;
mod rich_text;

pub use block::{
    Block, BlockNode, BlockVisitor, BookmarkBlock, CalloutBlock, CalloutIcon, CodeBlock,
    HeadingBlock, HeadingLevel, ImageBlock, ListItemBlock, ListType, ParagraphBlock, QuoteBlock,
    ToDoBlock, ToggleBlock,
};
pub use post::{PostContent, PostMetadata};
pub use rich_text::{plain_text, Annotations, StyledText};
