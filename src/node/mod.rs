//! Canvas tree node types.
//!
//! Block templates are built as a small element tree. In canvas mode the
//! tree itself is the result (a UI layer mounts it and wires the editable
//! fields); in HTML mode the same tree is written out by [`crate::html`].

mod element;
mod text;

pub use element::{Element, ElementIterator};
pub use text::{Text, TextKind};

use smallvec::SmallVec;

/// Node in a canvas tree - either Element or Text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    // Generates for each variant (element -> Element, text -> Text):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(element, text);
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 4]>;
