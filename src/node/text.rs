//! Text node type
//!
//! Text content nodes in the canvas tree.

/// How the HTML writer treats a text node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextKind {
    /// Escaped on output
    #[default]
    Normal,
    /// Written verbatim; only for markup this crate generates itself
    Raw,
}

/// Text content node
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Text content
    pub content: String,
    pub kind: TextKind,
}

impl Text {
    /// Create a new text node
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Normal,
        }
    }

    /// Create a text node that is written without escaping
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TextKind::Raw,
        }
    }

    #[inline]
    pub fn is_raw(&self) -> bool {
        self.kind == TextKind::Raw
    }
}
