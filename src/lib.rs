//! blockforge - Block documents and HTML rendering for marketing builders
//!
//! ## Core Concepts
//!
//! A document is an ordered list of [`Block`]s. Each block has a stable id,
//! typed content for one of the closed set of [`BlockType`]s, and a free-form
//! camelCase [`Style`] map. Three builder flavors share the model and differ
//! only in palette and output: [`Flavor::Email`] renders table-based HTML,
//! [`Flavor::Website`] and [`Flavor::Funnel`] render div/grid layouts.
//!
//! ## Modules
//! - `schema`: block palette, categories and defaults
//! - `block`: block types, typed content, factory
//! - `style`: camelCase style maps to inline CSS
//! - `document`: the ordered block list and its operations
//! - `render`: one template per block type, canvas or HTML output
//! - `serializer`: full HTML documents for preview and export
//! - `editor`: selection, edit modes and drag-and-drop over a document
//!
//! ## Usage
//!
//! ```
//! use blockforge::prelude::*;
//! use serde_json::json;
//!
//! let mut doc = DocumentModel::with_ids(SequentialIds::new());
//! let id = doc.insert(BlockType::Hero).id.clone();
//! doc.patch_content(&id, json!({ "headline": "Sale" }).as_object().unwrap()).unwrap();
//!
//! let html = DocumentSerializer::new(SerializeConfig::website()).serialize(doc.blocks());
//! assert!(html.contains("Sale"));
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Attribute list helpers
pub mod attr;

/// Block types, typed content and the default-block factory
pub mod block;

/// Flavors and render/serialize configuration
pub mod config;

/// Ordered block list with insert/remove/duplicate/move/patch
pub mod document;

/// Editor session over a document
pub mod editor;

/// Error types
pub mod error;

/// Stable content hashing
pub mod hash;

/// HTML writer and escaping
pub mod html;

/// Block ids and id generators
pub mod id;

/// Canvas tree: Element, Node, Text
pub mod node;

/// Prelude for common imports
pub mod prelude;

/// Block templates
pub mod render;

/// Palette and block defaults
pub mod schema;

/// Full-document serialization
pub mod serializer;

/// Style maps and CSS resolution
pub mod style;

// =============================================================================
// Re-exports
// =============================================================================

pub use block::{Block, BlockContent, BlockFactory, BlockType, create_default_block};
pub use config::{Flavor, RenderConfig, SerializeConfig};
pub use document::{DocumentAction, DocumentEvent, DocumentModel, DocumentPayload};
pub use editor::{EditorMode, EditorSession};
pub use error::{BuilderError, BuilderResult};
pub use id::{BlockId, IdGenerator, SequentialIds, TimestampIds};
pub use node::{Element, Node, Text, TextKind};
pub use render::{BlockRenderer, RenderMode, Rendered};
pub use schema::{BlockSchema, Category};
pub use serializer::DocumentSerializer;
pub use style::{Style, resolve_style};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use static_assertions::assert_impl_all;

    assert_impl_all!(Block: Send, Sync, Clone);
    assert_impl_all!(Style: Send, Sync);
    assert_impl_all!(DocumentModel<SequentialIds>: Send, Sync, Clone);
    assert_impl_all!(DocumentModel<TimestampIds>: Send, Sync);
    assert_impl_all!(BlockRenderer: Send, Sync);
    assert_impl_all!(DocumentSerializer: Send, Sync);
    assert_impl_all!(Element: Send, Sync);
    assert_impl_all!(BuilderError: Send, Sync, std::error::Error);

    fn doc(types: &[BlockType]) -> DocumentModel<SequentialIds> {
        let mut doc = DocumentModel::with_ids(SequentialIds::new());
        for t in types {
            doc.insert(*t);
        }
        doc
    }

    fn export(doc: &DocumentModel<SequentialIds>) -> String {
        DocumentSerializer::new(SerializeConfig::website()).serialize(doc.blocks())
    }

    fn ids(doc: &DocumentModel<SequentialIds>) -> Vec<String> {
        doc.blocks().iter().map(|b| b.id.to_string()).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scenarios
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_hero_headline_patch() {
        let mut doc = doc(&[BlockType::Hero]);
        doc.patch_content("block-1", json!({ "headline": "Sale" }).as_object().unwrap())
            .unwrap();

        let html = export(&doc);
        assert!(html.contains(">Sale</h1>"));
        assert!(!html.contains("Build Something Amazing"));
    }

    #[test]
    fn test_divider_default_border() {
        let html = export(&doc(&[BlockType::Divider]));
        let start = html.find("<hr").unwrap();
        let hr = &html[start..start + html[start..].find("/>").unwrap()];
        assert!(hr.contains("border-top: 1px solid #e5e7eb"));
    }

    #[test]
    fn test_move_reorders_output() {
        let mut doc = doc(&[BlockType::Hero, BlockType::Text, BlockType::Button]);
        assert!(doc.move_block(0, Some(2)));

        let types: Vec<_> = doc.blocks().iter().map(Block::type_name).collect();
        assert_eq!(types, ["text", "button", "hero"]);

        let html = export(&doc);
        let text = html.find("Start writing here").unwrap();
        let button = html.find("Click Here").unwrap();
        let hero = html.find("Build Something Amazing").unwrap();
        assert!(text < button && button < hero);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_factory_blocks_are_independent() {
        for block_type in BlockType::ALL {
            let mut a = create_default_block(block_type.as_str()).unwrap();
            let b = create_default_block(block_type.as_str()).unwrap();
            assert_ne!(a.id, b.id);
            assert_eq!(a.content, b.content);
            assert_eq!(a.style, b.style);

            a.patch_style(json!({ "color": "#123456" }).as_object().unwrap());
            assert_ne!(a.style, b.style);
        }
    }

    #[test]
    fn test_operations_keep_ids_unique_and_order() {
        let mut doc = doc(&[BlockType::Heading, BlockType::Text, BlockType::Spacer]);
        doc.duplicate("block-2").unwrap();
        doc.remove("block-1");
        doc.move_block(2, Some(0));
        doc.insert_at(1, BlockType::Divider);
        doc.duplicate("block-3").unwrap();

        let ids = ids(&doc);
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let canvas = BlockRenderer::new(Flavor::Website, RenderConfig::PREVIEW);
        let rendered: Vec<_> = doc
            .blocks()
            .iter()
            .map(|b| canvas.render_canvas(b).get_attr("data-block-id").map(str::to_owned))
            .collect();
        let expected: Vec<_> = ids.into_iter().map(Some).collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_style_resolution_is_total() {
        assert_eq!(resolve_style(None), "");
        assert_eq!(Style::default().resolve(), "");
        for value in [Value::Null, json!({}), json!({ "padding": 12, "color": "red" }), json!([1])] {
            let _ = Style::from_value(value).resolve();
        }
        let numeric = Style::from_value(json!({ "fontSize": 18 }));
        assert_eq!(numeric.resolve(), "font-size: 18");
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut doc = doc(&[BlockType::Hero, BlockType::Pricing, BlockType::Form]);
        doc.patch_style("block-2", json!({ "backgroundColor": "#fafafa" }).as_object().unwrap())
            .unwrap();

        let saved = doc.to_value().unwrap();
        let loaded = DocumentModel::load_with(saved, SequentialIds::new()).unwrap();
        assert_eq!(loaded.blocks(), doc.blocks());
    }

    #[test]
    fn test_duplicate_adjacent() {
        let mut doc = doc(&[BlockType::Heading, BlockType::Text, BlockType::Button]);
        let before = ids(&doc);
        let copy = doc.duplicate("block-2").unwrap().id.clone();

        let after = ids(&doc);
        assert_eq!(after.len(), 4);
        assert_eq!(after[2], copy.as_str());
        assert_eq!(&after[..2], &before[..2]);
        assert_eq!(after[3], before[2]);
        assert_eq!(doc.blocks()[1].content, doc.blocks()[2].content);
    }

    #[test]
    fn test_invalid_move_is_noop() {
        let mut doc = doc(&[BlockType::Heading, BlockType::Text]);
        let before = doc.to_json().unwrap();
        assert!(!doc.move_block(0, None));
        assert!(!doc.move_block(0, Some(7)));
        assert!(!doc.move_block(5, Some(0)));
        assert_eq!(doc.to_json().unwrap(), before);
    }

    #[test]
    fn test_empty_document_serialization() {
        for config in [SerializeConfig::email(), SerializeConfig::website(), SerializeConfig::funnel()] {
            let placeholder = config.flavor.empty_placeholder();
            let html = DocumentSerializer::new(config).serialize(&[]);
            assert!(html.starts_with("<!DOCTYPE html><html"));
            assert!(html.ends_with("</html>"));
            assert!(html.contains(placeholder));
        }
    }
}
