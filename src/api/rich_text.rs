// src/api/rich_text.rs
//! Normalizes Notion rich-text runs into styled spans.

use super::fields::{bool_or, str_at, string_or};
use crate::constants::DEFAULT_COLOR;
use crate::model::{Annotations, StyledText};
use serde_json::Value;

/// Converts a Notion rich-text array into styled spans.
///
/// Produces exactly one span per run, in order. `None`, `null`, or any
/// non-array input yields an empty vec. Never fails: every missing field
/// falls back to its default independently of the others.
pub fn normalize_rich_text(runs: Option<&Value>) -> Vec<StyledText> {
    match runs {
        Some(Value::Array(runs)) => runs.iter().map(normalize_run).collect(),
        _ => Vec::new(),
    }
}

/// Converts one rich-text run. Mentions and equations contribute their
/// `plain_text` like any other run.
fn normalize_run(run: &Value) -> StyledText {
    StyledText {
        content: string_or(run, &["plain_text"], ""),
        link: str_at(run, &["text", "link", "url"]).map(str::to_string),
        annotations: normalize_annotations(run),
    }
}

fn normalize_annotations(run: &Value) -> Annotations {
    let flag = |name: &str| bool_or(run, &["annotations", name], false);
    Annotations {
        bold: flag("bold"),
        italic: flag("italic"),
        strikethrough: flag("strikethrough"),
        underline: flag("underline"),
        code: flag("code"),
        color: string_or(run, &["annotations", "color"], DEFAULT_COLOR),
    }
}
