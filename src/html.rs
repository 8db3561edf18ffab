//! HTML writer for canvas trees
//!
//! Writes an [`Element`] tree to an HTML string. Text and attribute values
//! are escaped; only [`TextKind::Raw`](crate::node::TextKind::Raw) nodes are
//! written verbatim.

use crate::attr::Attrs;
use crate::node::{Element, Node};

// =============================================================================
// Tree Rendering
// =============================================================================

/// Render an element tree to an HTML string.
pub fn render_to_string(elem: &Element) -> String {
    let mut output = String::new();
    render_element(elem, &mut output);
    output
}

/// Render a list of sibling elements to one HTML string.
pub fn render_all<'a>(elems: impl IntoIterator<Item = &'a Element>) -> String {
    let mut output = String::new();
    for elem in elems {
        render_element(elem, &mut output);
    }
    output
}

/// Render an element to HTML.
pub fn render_element(elem: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);

    render_attrs(&elem.attrs, output);

    // Void elements
    if is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');

    for child in &elem.children {
        render_node(child, output);
    }

    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

/// Render a node to HTML.
pub fn render_node(node: &Node, output: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, output),
        Node::Text(text) => {
            if text.is_raw() {
                output.push_str(&text.content);
            } else {
                output.push_str(&escape_html(&text.content));
            }
        }
    }
}

/// Render an element tree with one element per line.
///
/// Only block-level containers whose children are all elements are broken
/// up; text and inline elements are written inline so no whitespace is
/// added to content.
pub fn render_pretty(elem: &Element) -> String {
    let mut output = String::new();
    render_pretty_element(elem, 0, &mut output);
    output
}

fn render_pretty_element(elem: &Element, depth: usize, output: &mut String) {
    const INDENT: &str = "  ";

    let block_children = is_layout_element(&elem.tag)
        && !elem.children.is_empty()
        && elem.children.iter().all(Node::is_element);
    if !block_children {
        render_element(elem, output);
        return;
    }

    output.push('<');
    output.push_str(&elem.tag);
    render_attrs(&elem.attrs, output);
    output.push('>');
    for child in elem.children_elements() {
        output.push('\n');
        output.push_str(&INDENT.repeat(depth + 1));
        render_pretty_element(child, depth + 1, output);
    }
    output.push('\n');
    output.push_str(&INDENT.repeat(depth));
    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

/// Containers whose inner whitespace does not show up in rendered text
fn is_layout_element(tag: &str) -> bool {
    matches!(
        tag,
        "html"
            | "head"
            | "body"
            | "div"
            | "section"
            | "table"
            | "tbody"
            | "tr"
            | "td"
            | "ul"
            | "ol"
            | "form"
            | "details"
    )
}

/// Render attributes to HTML.
fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

// =============================================================================
// Escaping
// =============================================================================

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_element() {
        let elem = Element::new("div").attr("data-block-id", "block-1").text("Hi");
        assert_eq!(render_to_string(&elem), r#"<div data-block-id="block-1">Hi</div>"#);
    }

    #[test]
    fn test_void_elements() {
        let elem = Element::new("p")
            .text("a")
            .child(Element::new("br"))
            .text("b");
        assert_eq!(render_to_string(&elem), "<p>a<br />b</p>");
        assert!(is_void_element("hr"));
        assert!(!is_void_element("div"));
    }

    #[test]
    fn test_text_and_attrs_are_escaped() {
        let elem = Element::new("a")
            .attr("title", r#"say "hi" & <bye>"#)
            .text("<script>alert(1)</script>");
        let html = render_to_string(&elem);
        assert!(html.contains(r#"title="say &quot;hi&quot; &amp; &lt;bye&gt;""#));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_raw_text_is_verbatim() {
        let elem = Element::new("div").raw("&nbsp;");
        assert_eq!(render_to_string(&elem), "<div>&nbsp;</div>");
    }

    #[test]
    fn test_render_all_siblings() {
        let items = [Element::new("li").text("1"), Element::new("li").text("2")];
        assert_eq!(render_all(&items), "<li>1</li><li>2</li>");
    }

    #[test]
    fn test_render_pretty_keeps_text_inline() {
        let elem = Element::new("ul")
            .child(Element::new("li").text("a"))
            .child(Element::new("li").text("b").child(Element::new("br")));
        assert_eq!(render_pretty(&elem), "<ul>\n  <li>a</li>\n  <li>b<br /></li>\n</ul>");
    }

    #[test]
    fn test_render_pretty_keeps_inline_children_together() {
        let price = Element::new("p")
            .child(Element::new("span").text("$9"))
            .child(Element::new("span").text("/month"));
        let elem = Element::new("div").child(price);
        assert_eq!(
            render_pretty(&elem),
            "<div>\n  <p><span>$9</span><span>/month</span></p>\n</div>"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }
}
