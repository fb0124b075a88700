// src/lib.rs
//! notion-blog library: renders blog posts authored in Notion as HTML.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `BlogConfig`, `CommandLineInput`, `Credentials`
//! - **Domain model**: `Block`, `BlockNode`, `StyledText`, `PostMetadata`
//! - **Domain types**: `PageId`, `BlockId`, `DatabaseId`, `ApiKey`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, parsers, `BlockTreeFetcher`
//! - **Service**: `BlogService`
//! - **Formatting**: `render_blocks`, `Markup`, `HtmlComposer`
//! - **Output**: `OutputPlan`, `deliver`

pub mod api;
pub mod blog;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{BlogCommand, BlogConfig, CommandLineInput, Credentials, PageRequest};

// --- Domain Model ---
pub use crate::model::{
    plain_text, Annotations, Block, BlockNode, BlockVisitor, BookmarkBlock, CalloutBlock,
    CalloutIcon, CodeBlock, HeadingBlock, HeadingLevel, ImageBlock, ListItemBlock, ListType,
    ParagraphBlock, PostContent, PostMetadata, QuoteBlock, StyledText, ToDoBlock, ToggleBlock,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, BlockId, DatabaseId, Id, PageId};

// --- API Client ---
pub use crate::api::{
    count_nodes, normalize_rich_text, parse_block, parse_blocks, parse_post_metadata,
    BlockTreeFetcher, NotionHttpClient, NotionRepository, PaginatedResponse,
};

// --- Service ---
pub use crate::blog::BlogService;

// --- Formatting ---
pub use crate::formatting::{render_blocks, render_blocks_html, HtmlComposer, Markup};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};

// --- Pipeline Traits ---
pub use crate::pipeline::{PageComposer, PageDelivery, PostSource};
