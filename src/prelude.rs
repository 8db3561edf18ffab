//! Prelude module for common imports.
//!
//! ```
//! use blockforge::prelude::*;
//! ```

// Blocks
pub use crate::block::{Block, BlockContent, BlockFactory, BlockType, create_default_block};

// Schema
pub use crate::schema::{BlockSchema, Category, SchemaEntry};

// Style
pub use crate::style::{Style, resolve_style};

// Document
pub use crate::document::{DocumentAction, DocumentEvent, DocumentModel, DocumentPayload};

// Editor
pub use crate::editor::{DragState, EditorMode, EditorSession};

// Rendering
pub use crate::config::{DEFAULT_ID_ATTR, Flavor, RenderConfig, SerializeConfig};
pub use crate::render::{BlockRenderer, RenderMode, Rendered};
pub use crate::serializer::DocumentSerializer;

// Canvas tree
pub use crate::node::{Element, Node, Text, TextKind};

// Identity
pub use crate::id::{BlockId, IdGenerator, SequentialIds, TimestampIds};

// Error
pub use crate::error::{BuilderError, BuilderResult};
