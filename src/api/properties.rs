// src/api/properties.rs
//! Reads post metadata out of a Notion page record.

use super::fields::{array_at, field, file_url, str_at, string_or};
use super::rich_text::normalize_rich_text;
use crate::constants::{
    CATEGORIES_PROPERTY, DATE_PROPERTY, SERIES_PROPERTY, STATUS_PROPERTY, TITLE_PROPERTY,
};
use crate::model::{plain_text, PostMetadata};
use crate::types::PageId;
use serde_json::Value;

/// Builds post metadata from a page record. Never fails; absent properties
/// take their defaults.
pub fn parse_post_metadata(page: &Value) -> PostMetadata {
    let properties = page.get("properties").unwrap_or(&Value::Null);

    PostMetadata {
        id: PageId::from_api(string_or(page, &["id"], "")),
        title: title(properties),
        status: select_name(properties.get(STATUS_PROPERTY)).unwrap_or_default(),
        created_date: created_date(page, properties),
        series: select_name(properties.get(SERIES_PROPERTY)),
        categories: multi_select_names(properties.get(CATEGORIES_PROPERTY)),
        thumbnail: page.get("cover").and_then(file_url),
    }
}

/// Plain text of the `Title` property, or of whichever property has type
/// `title` when the database names it differently.
fn title(properties: &Value) -> String {
    let named = properties
        .get(TITLE_PROPERTY)
        .filter(|p| str_at(p, &["type"]) == Some("title"));
    let any_title = || {
        properties
            .as_object()?
            .values()
            .find(|p| str_at(p, &["type"]) == Some("title"))
    };

    named
        .or_else(any_title)
        .map(|p| plain_text(&normalize_rich_text(p.get("title"))))
        .unwrap_or_default()
}

/// Option name of a `select` or `status` property.
fn select_name(property: Option<&Value>) -> Option<String> {
    let property = property?;
    let kind = str_at(property, &["type"])?;
    match kind {
        "select" | "status" => str_at(property, &[kind, "name"]).map(str::to_string),
        _ => None,
    }
}

/// Option names of a `multi_select` property in API order.
fn multi_select_names(property: Option<&Value>) -> Vec<String> {
    property
        .map(|p| array_at(p, &["multi_select"]))
        .unwrap_or_default()
        .iter()
        .filter_map(|option| str_at(option, &["name"]))
        .map(str::to_string)
        .collect()
}

/// Start of the `Date` property, falling back to the page's creation time.
fn created_date(page: &Value, properties: &Value) -> String {
    field(properties, &[DATE_PROPERTY, "date", "start"])
        .and_then(Value::as_str)
        .or_else(|| str_at(page, &["created_time"]))
        .unwrap_or_default()
        .to_string()
}
