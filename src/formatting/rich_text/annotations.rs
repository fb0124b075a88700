// src/formatting/rich_text/annotations.rs
//! Annotation processing for rich text.

use crate::formatting::markup::{Element, Markup};
use crate::model::Annotations;

/// Wraps `content` in the elements its annotations call for.
///
/// Nesting is fixed, outermost to innermost: color, strikethrough,
/// underline, italic, bold, inline code. Rendered snapshots depend on it.
pub fn apply_annotations(content: Markup, annotations: &Annotations) -> Markup {
    let mut result = content;

    if annotations.code {
        result = result.wrap("code").into();
    }

    if annotations.bold {
        result = result.wrap("strong").into();
    }

    if annotations.italic {
        result = result.wrap("em").into();
    }

    if annotations.underline {
        result = result.wrap("u").into();
    }

    if annotations.strikethrough {
        result = result.wrap("s").into();
    }

    if annotations.has_color() {
        result = Element::new("span")
            .attr("class", color_class(&annotations.color))
            .child(result)
            .into();
    }

    result
}

/// CSS hook for a Notion color, e.g. `notion-red_background`.
pub fn color_class(color: &str) -> String {
    format!("notion-{}", color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_in_fixed_order() {
        let annotations = Annotations {
            bold: true,
            italic: true,
            strikethrough: true,
            underline: true,
            code: true,
            color: "default".to_string(),
        };

        let html = apply_annotations(Markup::text("x"), &annotations).to_html();

        assert_eq!(
            html,
            "<s><u><em><strong><code>x</code></strong></em></u></s>"
        );
    }

    #[test]
    fn test_color_is_outermost() {
        let annotations = Annotations {
            underline: true,
            color: "blue".to_string(),
            ..Default::default()
        };

        let html = apply_annotations(Markup::text("x"), &annotations).to_html();

        assert_eq!(html, "<span class=\"notion-blue\"><u>x</u></span>");
    }

    #[test]
    fn test_no_annotations_is_bare_text() {
        let html = apply_annotations(Markup::text("x"), &Annotations::default()).to_html();
        assert_eq!(html, "x");
    }
}
