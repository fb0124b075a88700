// src/api/fields.rs
//! Total accessors over raw Notion JSON.
//!
//! Notion payloads have no compile-time shape. Every accessor here returns a
//! value for any input: a missing key, a wrong type, or a `null` anywhere on
//! the path yields the documented default.

use serde_json::Value;

/// Follows `path` through nested objects.
pub fn field<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// String at `path`, if the path resolves to a JSON string.
pub fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    field(value, path).and_then(Value::as_str)
}

/// String at `path`, or `default`.
pub fn string_or(value: &Value, path: &[&str], default: &str) -> String {
    str_at(value, path).unwrap_or(default).to_string()
}

/// Boolean at `path`, or `default`.
pub fn bool_or(value: &Value, path: &[&str], default: bool) -> bool {
    field(value, path)
        .and_then(Value::as_bool)
        .unwrap_or(default)
}

/// Array at `path`, or an empty slice.
pub fn array_at<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    field(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Resolves a Notion file object (`{type, external: {url}} | {type, file: {url}}`)
/// to its URL.
///
/// The object's own type tag is consulted first; if it is missing or points
/// at an absent sub-object, whichever of the two sub-objects carries a
/// non-empty URL wins. `None` when neither does.
pub fn file_url(file_object: &Value) -> Option<String> {
    let by_tag = match str_at(file_object, &["type"]) {
        Some("external") => str_at(file_object, &["external", "url"]),
        Some("file") => str_at(file_object, &["file", "url"]),
        _ => None,
    };

    by_tag
        .or_else(|| str_at(file_object, &["external", "url"]))
        .or_else(|| str_at(file_object, &["file", "url"]))
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_never_fail() {
        let value = json!({ "a": { "b": "text", "flag": true, "list": [1, 2] }, "n": null });

        assert_eq!(str_at(&value, &["a", "b"]), Some("text"));
        assert_eq!(str_at(&value, &["a", "flag"]), None);
        assert_eq!(str_at(&value, &["n", "deeper"]), None);
        assert_eq!(string_or(&value, &["missing"], "fallback"), "fallback");
        assert!(bool_or(&value, &["a", "flag"], false));
        assert!(bool_or(&value, &["a", "b"], true));
        assert_eq!(array_at(&value, &["a", "list"]).len(), 2);
        assert!(array_at(&value, &["a", "b"]).is_empty());
        assert!(array_at(&json!("scalar"), &["x"]).is_empty());
    }

    #[test]
    fn test_file_url_follows_type_tag() {
        let external = json!({ "type": "external", "external": { "url": "https://e.com/a.png" } });
        let hosted = json!({ "type": "file", "file": { "url": "https://s3/b.png", "expiry_time": "2025-01-01" } });
        let untagged = json!({ "file": { "url": "https://s3/c.png" } });

        assert_eq!(file_url(&external).as_deref(), Some("https://e.com/a.png"));
        assert_eq!(file_url(&hosted).as_deref(), Some("https://s3/b.png"));
        assert_eq!(file_url(&untagged).as_deref(), Some("https://s3/c.png"));
    }

    #[test]
    fn test_file_url_unresolvable() {
        assert_eq!(file_url(&json!({ "type": "external" })), None);
        assert_eq!(file_url(&json!({ "type": "external", "external": { "url": "" } })), None);
        assert_eq!(file_url(&json!(null)), None);
    }
}
