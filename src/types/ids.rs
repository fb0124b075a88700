use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;
pub type DatabaseId = Id<DatabaseMarker>;

impl<T> Id<T> {
    /// Parse user-supplied Notion ID formats (bare, dashed, or a notion.so URL)
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_notion_id(input)?;
        Ok(Self::from_api(normalized))
    }

    /// Wrap an identifier exactly as the Notion API returned it.
    ///
    /// Identifiers inside API responses are trusted and kept verbatim so the
    /// block tree reports the same ids the source does.
    pub fn from_api(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the ID with dashes for API calls
    pub fn to_dashed(&self) -> String {
        if self.value.len() == 32 && self.value.bytes().all(|b| b.is_ascii_hexdigit()) {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }

    /// Reinterpret the same identifier as another object kind.
    ///
    /// A Notion page is also the root block of its own content, so a
    /// `PageId` doubles as the `BlockId` whose children are the page body.
    pub fn retag<U>(&self) -> Id<U> {
        Id::from_api(self.value.clone())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_api(value))
    }
}

/// Normalize various Notion ID formats into a consistent format
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let input = input.trim();

    if input.starts_with("http://") || input.starts_with("https://") {
        if let Some(id) = extract_id_from_url(input) {
            return normalize_notion_id(id);
        }
        return Err(ValidationError::InvalidId(format!(
            "Could not extract ID from URL: {}",
            input
        )));
    }

    let normalized = input.replace('-', "");

    if normalized.len() != 32 {
        return Err(ValidationError::InvalidId(format!(
            "Invalid ID length: expected 32 characters, got {}",
            normalized.len()
        )));
    }

    if !normalized.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidId(
            "ID must contain only hexadecimal characters".to_string(),
        ));
    }

    Ok(normalized.to_lowercase())
}

/// Extract ID from Notion URL
fn extract_id_from_url(url: &str) -> Option<&str> {
    let parsed = url::Url::parse(url).ok()?;
    let last_segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;

    // Format: https://www.notion.so/[workspace]/[title]-[id]
    if let Some(pos) = last_segment.rfind('-') {
        let potential_id = &last_segment[pos + 1..];
        if potential_id.len() == 32 {
            return url_slice(url, potential_id);
        }
    }

    // Format: https://www.notion.so/[id]
    if last_segment.len() == 32 || (last_segment.len() == 36 && last_segment.contains('-')) {
        return url_slice(url, last_segment);
    }

    None
}

/// Re-borrows `needle` from `url` so the extracted id keeps the input lifetime.
fn url_slice<'a>(url: &'a str, needle: &str) -> Option<&'a str> {
    url.rfind(needle).map(|start| &url[start..start + needle.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("https://www.notion.so/My-Post-550e8400e29b41d4a716446655440000")
            .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("https://www.notion.so/550e8400e29b41d4a716446655440000?v=1")
            .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(PageId::parse("too-short").is_err());
        assert!(PageId::parse("not-hex-chars-00000000000000000").is_err());
        assert!(PageId::parse("").is_err());
        assert!(PageId::parse("https://www.notion.so/no-id-here").is_err());
    }

    #[test]
    fn test_to_dashed() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.to_dashed(), "550e8400-e29b-41d4-a716-446655440000");

        let api_id = BlockId::from_api("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(api_id.to_dashed(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_to_dashed_leaves_malformed_api_ids_alone() {
        let non_ascii = BlockId::from_api("abcdefgé0123456789abcdef0123456");
        assert_eq!(non_ascii.as_str().len(), 32);
        assert_eq!(non_ascii.to_dashed(), "abcdefgé0123456789abcdef0123456");

        let non_hex = BlockId::from_api("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz");
        assert_eq!(non_hex.to_dashed(), "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz");
    }

    #[test]
    fn test_retag_keeps_value() {
        let page = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let root: BlockId = page.retag();
        assert_eq!(root.as_str(), page.as_str());
    }
}
