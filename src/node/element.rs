//! Element type - HTML elements of the canvas tree
//!
//! The core building block of every block template, with a builder API for
//! writing templates and a query API for inspecting rendered canvases.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};

use super::{Children, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// HTML tag name
    pub tag: CompactString,
    /// Element attributes, in output order
    pub attrs: Attrs,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: CompactString::new(tag),
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an attribute (builder)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Add an attribute only when a value is present (builder)
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set the inline `style` attribute; empty styles are omitted (builder)
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        let style = style.into();
        if !style.is_empty() {
            self.set_attr("style", style);
        }
        self
    }

    /// Append a child element (builder)
    pub fn child(mut self, child: Element) -> Self {
        self.push_elem(child);
        self
    }

    /// Append every element of an iterator as children (builder)
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self.push_elem(child);
        }
        self
    }

    /// Append an escaped text child (builder)
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.push_text(content);
        self
    }

    /// Append a verbatim text child (builder)
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(Text::raw(content)));
        self
    }

    pub fn push_elem(&mut self, child: Element) {
        self.children.push(Node::Element(Box::new(child)));
    }

    pub fn push_text(&mut self, content: impl Into<String>) {
        self.children.push(Node::Text(Text::new(content)));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Set attribute value (update if exists, add if not)
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.set_attr(name, value);
    }

    /// Remove attribute by name, returning the old value if it existed
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Children
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| n.as_element())
    }

    /// Get text content of this element (concatenated from all text nodes)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find first element matching predicate (depth-first, self included)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().find(|e| predicate(e))
    }

    /// Find all elements matching predicate, in document order
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().filter(|e| predicate(e)).collect()
    }

    /// Iterate over this element and all descendants (depth-first)
    pub fn elements(&self) -> ElementIterator<'_> {
        ElementIterator { stack: vec![self] }
    }
}

// =============================================================================
// ElementIterator - depth-first element traversal
// =============================================================================

/// Depth-first iterator over elements
pub struct ElementIterator<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for ElementIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        for child in elem.children.iter().rev() {
            if let Some(child_elem) = child.as_element() {
                self.stack.push(child_elem);
            }
        }
        Some(elem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_basics() {
        let elem = Element::new("div");
        assert_eq!(elem.tag, "div");
        assert!(elem.is_empty());
    }

    #[test]
    fn test_empty_style_is_omitted() {
        let elem = Element::new("p").with_style("");
        assert!(!elem.has_attr("style"));

        let elem = Element::new("p").with_style("color: red");
        assert_eq!(elem.get_attr("style"), Some("color: red"));
    }

    #[test]
    fn test_attr_opt() {
        let elem = Element::new("a").attr_opt("href", None::<String>);
        assert!(!elem.has_attr("href"));

        let elem = Element::new("a").attr_opt("href", Some("/pricing"));
        assert_eq!(elem.get_attr("href"), Some("/pricing"));
    }
}
