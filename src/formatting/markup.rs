// src/formatting/markup.rs
//! A minimal HTML markup tree.
//!
//! Renderers build `Markup` values instead of strings so tests can inspect
//! structure, and so escaping happens in exactly one place.

use std::fmt;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// A node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// A sequence of sibling nodes with no wrapper of its own.
    Fragment(Vec<Markup>),
}

/// An HTML element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    /// Attribute name and value; `None` is a boolean attribute.
    pub attributes: Vec<(&'static str, Option<String>)>,
    pub children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, Some(value.into())));
        self
    }

    /// Adds a valueless attribute such as `disabled`.
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attributes.push((name, None));
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }

    /// Looks up an attribute value. Boolean attributes report `Some("")`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

/// An anchor that opens `url` in a new tab.
pub fn external_link(url: &str, content: impl Into<Markup>) -> Element {
    Element::new("a")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(content)
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Markup::Element(element)
    }
}

impl Markup {
    pub fn text(content: impl Into<String>) -> Self {
        Markup::Text(content.into())
    }

    /// A fragment with nothing in it.
    pub fn empty() -> Self {
        Markup::Fragment(Vec::new())
    }

    /// Wraps this node in a new element.
    pub fn wrap(self, tag: &'static str) -> Element {
        Element::new(tag).child(self)
    }

    /// Serializes the tree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Markup::Text(text) => {
                html_escape::encode_text_to_string(text, out);
            }
            Markup::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
            Markup::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attributes {
                    out.push(' ');
                    out.push_str(name);
                    if let Some(value) = value {
                        out.push_str("=\"");
                        html_escape::encode_double_quoted_attribute_to_string(value, out);
                        out.push('"');
                    }
                }
                out.push('>');
                if element.is_void() {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let markup: Markup = Element::new("a")
            .attr("href", "https://x.example/?a=1&b=\"2\"")
            .child(Markup::text("<b> & co"))
            .into();

        assert_eq!(
            markup.to_html(),
            "<a href=\"https://x.example/?a=1&amp;b=&quot;2&quot;\">&lt;b&gt; &amp; co</a>"
        );
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let markup: Markup = Element::new("input")
            .attr("type", "checkbox")
            .flag("disabled")
            .into();
        let Markup::Element(element) = &markup else {
            panic!("expected an element");
        };
        assert_eq!(element.attribute("type"), Some("checkbox"));
        assert_eq!(element.attribute("disabled"), Some(""));
        assert_eq!(element.attribute("checked"), None);
        assert_eq!(markup.to_html(), "<input type=\"checkbox\" disabled>");
    }

    #[test]
    fn test_fragments_have_no_wrapper() {
        let markup = Markup::Fragment(vec![
            Element::new("hr").into(),
            Markup::text("a"),
            Markup::empty(),
        ]);
        assert_eq!(markup.to_html(), "<hr>a");
    }
}
