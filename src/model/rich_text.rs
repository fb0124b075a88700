use crate::constants::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};

/// Text styling flags carried by a single run of rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl Annotations {
    /// Whether the run carries a color other than the Notion default.
    pub fn has_color(&self) -> bool {
        self.color != DEFAULT_COLOR
    }
}

/// One run of text plus its style and optional link.
///
/// Spans are the atomic unit of rich text: they have no identity beyond
/// their position in the containing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub annotations: Annotations,
}

impl StyledText {
    /// Create an unstyled, unlinked span.
    pub fn plain(text: &str) -> Self {
        Self {
            content: text.to_string(),
            link: None,
            annotations: Annotations::default(),
        }
    }
}

/// Concatenates the raw text of a span sequence.
pub fn plain_text(spans: &[StyledText]) -> String {
    spans.iter().map(|span| span.content.as_str()).collect()
}
