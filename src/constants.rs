// src/constants.rs
//! Domain constants that define the operational boundaries of the blog.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many block children the Notion API returns per request.
///
/// The Notion API maximum is 100.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// How many pages of children are listed per parent unless configured
/// otherwise. One page means at most `NOTION_API_PAGE_SIZE` children.
pub const DEFAULT_CHILD_PAGE_LIMIT: u32 = 1;

/// Maximum nesting depth when recursively fetching block children.
pub const NOTION_MAX_FETCH_DEPTH: usize = 50;

// ---------------------------------------------------------------------------
// Block defaults
// ---------------------------------------------------------------------------

/// Notion's name for "no color".
pub const DEFAULT_COLOR: &str = "default";

/// Language assigned to code blocks that don't declare one.
pub const DEFAULT_CODE_LANGUAGE: &str = "plain text";

/// Glyph shown for callouts whose icon is missing or not an emoji.
pub const FALLBACK_CALLOUT_ICON: &str = "💡";

// ---------------------------------------------------------------------------
// Post properties
// ---------------------------------------------------------------------------

/// Names of the database properties a post is read from.
pub const TITLE_PROPERTY: &str = "Title";
pub const STATUS_PROPERTY: &str = "Status";
pub const DATE_PROPERTY: &str = "Date";
pub const SERIES_PROPERTY: &str = "Series";
pub const CATEGORIES_PROPERTY: &str = "Categories";

/// Status a post must carry to be listed, unless drafts are requested.
pub const DEFAULT_PUBLISHED_STATUS: &str = "Published";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
