//! Editor session: selection, edit/style modes and drag-and-drop
//!
//! An [`EditorSession`] owns the [`DocumentModel`] of the artifact being
//! edited and routes every change through [`EditorSession::dispatch`], so
//! selection stays consistent and observers see each change exactly once.
//!
//! Per block, the session moves between three modes by explicit user
//! action only:
//!
//! ```text
//! Viewing ──begin_edit──▶ Editing(id) ──commit/cancel──▶ Viewing
//! Viewing ──begin_style─▶ Styling(id) ──commit/cancel──▶ Viewing
//! ```
//!
//! Edits are staged in a draft and applied as one patch on commit; cancel
//! discards the draft. There is no autosave.

use std::fmt;

use serde_json::{Map, Value};

use crate::block::{Block, BlockType};
use crate::config::{Flavor, RenderConfig, SerializeConfig};
use crate::document::{DocumentAction, DocumentEvent, DocumentModel};
use crate::error::{BuilderError, BuilderResult};
use crate::id::{BlockId, IdGenerator, TimestampIds};
use crate::node::Element;
use crate::render::BlockRenderer;
use crate::serializer::DocumentSerializer;

/// Attribute marking the selected block on the canvas
pub const SELECTED_ATTR: &str = "data-selected";

// =============================================================================
// EditorMode
// =============================================================================

/// What the session is doing with a block
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorMode {
    #[default]
    Viewing,
    /// Content edit in progress; `draft` is applied on commit
    Editing { id: BlockId, draft: Map<String, Value> },
    /// Style edit in progress; `draft` is applied on commit
    Styling { id: BlockId, draft: Map<String, Value> },
}

impl EditorMode {
    pub fn is_viewing(&self) -> bool {
        matches!(self, Self::Viewing)
    }

    /// Block being edited or styled
    pub fn target(&self) -> Option<&BlockId> {
        match self {
            Self::Viewing => None,
            Self::Editing { id, .. } | Self::Styling { id, .. } => Some(id),
        }
    }

    /// Staged changes of the current edit
    pub fn draft(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Viewing => None,
            Self::Editing { draft, .. } | Self::Styling { draft, .. } => Some(draft),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Editing { .. } => "editing",
            Self::Styling { .. } => "styling",
        }
    }
}

// =============================================================================
// Drag gesture
// =============================================================================

/// An in-progress drag: source index and current drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub from: usize,
    pub over: Option<usize>,
}

/// Callback receiving every change the session applies
pub type Observer = Box<dyn FnMut(&DocumentEvent)>;

// =============================================================================
// EditorSession
// =============================================================================

/// One editing session over one document
pub struct EditorSession<G = TimestampIds> {
    document: DocumentModel<G>,
    config: SerializeConfig,
    selection: Option<BlockId>,
    mode: EditorMode,
    drag: Option<DragState>,
    saved_fingerprint: u64,
    observers: Vec<Observer>,
}

impl EditorSession<TimestampIds> {
    /// Empty session for a builder flavor
    pub fn new(flavor: Flavor) -> Self {
        Self::with_document(DocumentModel::new(), SerializeConfig::for_flavor(flavor))
    }
}

impl<G: IdGenerator> EditorSession<G> {
    /// Session over a loaded document; the loaded state counts as saved
    pub fn with_document(document: DocumentModel<G>, config: SerializeConfig) -> Self {
        let saved_fingerprint = document.fingerprint();
        Self {
            document,
            config,
            selection: None,
            mode: EditorMode::Viewing,
            drag: None,
            saved_fingerprint,
            observers: Vec::new(),
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.config.flavor
    }

    pub fn config(&self) -> &SerializeConfig {
        &self.config
    }

    pub fn document(&self) -> &DocumentModel<G> {
        &self.document
    }

    pub fn blocks(&self) -> &[Block] {
        self.document.blocks()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selection(&self) -> Option<&BlockId> {
        self.selection.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selection.as_ref().and_then(|id| self.document.get(id))
    }

    pub fn select(&mut self, id: impl AsRef<str>) -> BuilderResult<()> {
        let block = self
            .document
            .get(&id)
            .ok_or_else(|| BuilderError::BlockNotFound(BlockId::new(id.as_ref())))?;
        self.selection = Some(block.id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply an action, keep the selection consistent and notify observers
    ///
    /// Inserted and duplicated blocks become selected. Removing the selected
    /// block clears the selection; removing the block being edited ends the
    /// edit without applying it.
    pub fn dispatch(&mut self, action: DocumentAction) -> BuilderResult<DocumentEvent> {
        let event = self.document.apply(action)?;

        match &event {
            DocumentEvent::Inserted { id, .. } | DocumentEvent::Duplicated { id, .. } => {
                self.selection = Some(id.clone());
            }
            DocumentEvent::Removed { id, .. } => {
                if self.selection.as_ref() == Some(id) {
                    self.selection = None;
                }
                if self.mode.target() == Some(id) {
                    tracing::debug!(block_id = %id, mode = self.mode.name(), "edited block removed, discarding draft");
                    self.mode = EditorMode::Viewing;
                }
            }
            _ => {}
        }

        if event.is_change() {
            for observer in &mut self.observers {
                observer(&event);
            }
        }
        Ok(event)
    }

    /// Append a default block and select it
    pub fn add_block(&mut self, block_type: BlockType) -> BuilderResult<DocumentEvent> {
        self.dispatch(DocumentAction::Insert { block_type, index: None })
    }

    pub fn remove_block(&mut self, id: impl Into<BlockId>) -> BuilderResult<DocumentEvent> {
        self.dispatch(DocumentAction::Remove { id: id.into() })
    }

    pub fn duplicate_block(&mut self, id: impl Into<BlockId>) -> BuilderResult<DocumentEvent> {
        self.dispatch(DocumentAction::Duplicate { id: id.into() })
    }

    /// Register a change observer
    pub fn subscribe(&mut self, observer: impl FnMut(&DocumentEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edit / style state machine
    // ─────────────────────────────────────────────────────────────────────────

    /// Start editing a block's content; an unfinished edit is discarded
    pub fn begin_edit(&mut self, id: impl AsRef<str>) -> BuilderResult<()> {
        let id = self.enter(id.as_ref())?;
        self.mode = EditorMode::Editing { id, draft: Map::new() };
        Ok(())
    }

    /// Start editing a block's style; an unfinished edit is discarded
    pub fn begin_style(&mut self, id: impl AsRef<str>) -> BuilderResult<()> {
        let id = self.enter(id.as_ref())?;
        self.mode = EditorMode::Styling { id, draft: Map::new() };
        Ok(())
    }

    fn enter(&mut self, id: &str) -> BuilderResult<BlockId> {
        self.select(id)?;
        if let Some(previous) = self.mode.target() {
            tracing::debug!(block_id = %previous, mode = self.mode.name(), "discarding unfinished edit");
        }
        let id = BlockId::new(id);
        tracing::debug!(block_id = %id, "begin block edit");
        Ok(id)
    }

    /// Stage one field of the current edit
    pub fn stage(&mut self, key: impl Into<String>, value: impl Into<Value>) -> BuilderResult<()> {
        match &mut self.mode {
            EditorMode::Viewing => Err(BuilderError::NotEditing),
            EditorMode::Editing { draft, .. } | EditorMode::Styling { draft, .. } => {
                draft.insert(key.into(), value.into());
                Ok(())
            }
        }
    }

    /// Stage several fields at once
    pub fn stage_patch(&mut self, patch: &Map<String, Value>) -> BuilderResult<()> {
        for (key, value) in patch {
            self.stage(key.clone(), value.clone())?;
        }
        Ok(())
    }

    /// Apply the staged draft and return to viewing
    ///
    /// A draft that does not fit the block's content schema is rejected; the
    /// session stays in its edit mode with the draft intact.
    pub fn commit(&mut self) -> BuilderResult<DocumentEvent> {
        let mode = std::mem::take(&mut self.mode);
        let action = match &mode {
            EditorMode::Viewing => return Err(BuilderError::NotEditing),
            EditorMode::Editing { draft, .. } | EditorMode::Styling { draft, .. } if draft.is_empty() => {
                tracing::debug!(mode = mode.name(), "commit with empty draft");
                return Ok(DocumentEvent::Unchanged);
            }
            EditorMode::Editing { id, draft } => DocumentAction::PatchContent {
                id: id.clone(),
                patch: draft.clone(),
            },
            EditorMode::Styling { id, draft } => DocumentAction::PatchStyle {
                id: id.clone(),
                patch: draft.clone(),
            },
        };

        match self.dispatch(action) {
            Ok(event) => {
                tracing::debug!(mode = mode.name(), "commit block edit");
                Ok(event)
            }
            Err(err) => {
                self.mode = mode;
                Err(err)
            }
        }
    }

    /// Discard the staged draft and return to viewing
    pub fn cancel(&mut self) -> BuilderResult<()> {
        if self.mode.is_viewing() {
            return Err(BuilderError::NotEditing);
        }
        tracing::debug!(mode = self.mode.name(), "cancel block edit");
        self.mode = EditorMode::Viewing;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drag and drop
    // ─────────────────────────────────────────────────────────────────────────

    /// Start dragging the block at `from`; false when out of range
    pub fn begin_drag(&mut self, from: usize) -> bool {
        if from >= self.document.len() {
            return false;
        }
        self.drag = Some(DragState { from, over: None });
        true
    }

    /// Update the current drop target; `None` when outside any target
    pub fn drag_over(&mut self, target: Option<usize>) {
        if let Some(drag) = &mut self.drag {
            drag.over = target;
        }
    }

    /// Finish the gesture, moving the block to the current target
    pub fn drop_drag(&mut self) -> BuilderResult<DocumentEvent> {
        match self.drag.take() {
            Some(DragState { from, over }) => self.dispatch(DocumentAction::Move { from, to: over }),
            None => Ok(DocumentEvent::Unchanged),
        }
    }

    /// Abandon the gesture; the document is untouched
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────

    /// Canvas trees of every block; the selected block carries `data-selected`
    pub fn canvas(&self) -> Vec<Element> {
        let renderer = BlockRenderer::new(self.config.flavor, self.config.render.clone());
        self.document
            .blocks()
            .iter()
            .map(|block| {
                let tree = renderer.render_canvas(block);
                if self.selection.as_ref() == Some(&block.id) {
                    tree.attr(SELECTED_ATTR, "true")
                } else {
                    tree
                }
            })
            .collect()
    }

    /// Preview document for an iframe `srcdoc`; blocks carry id attributes
    pub fn preview(&self) -> String {
        let render = RenderConfig {
            emit_block_ids: true,
            ..self.config.render.clone()
        };
        DocumentSerializer::new(self.config.clone().with_render(render)).serialize(self.blocks())
    }

    /// Clean export document
    pub fn export_html(&self) -> String {
        DocumentSerializer::new(self.config.clone()).serialize(self.blocks())
    }

    /// Indented export document for a "view HTML" pane
    pub fn view_source(&self) -> String {
        DocumentSerializer::new(self.config.clone()).view_source(self.blocks())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save state
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the document differs from the last saved state
    pub fn is_dirty(&self) -> bool {
        self.document.fingerprint() != self.saved_fingerprint
    }

    /// Record the current document as saved
    pub fn mark_saved(&mut self) {
        self.saved_fingerprint = self.document.fingerprint();
    }

    /// Payload to send to the backend
    pub fn save_json(&self) -> BuilderResult<String> {
        self.document.to_json()
    }
}

impl<G: IdGenerator> fmt::Debug for EditorSession<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("flavor", &self.config.flavor)
            .field("blocks", &self.document.blocks().len())
            .field("selection", &self.selection)
            .field("mode", &self.mode)
            .field("drag", &self.drag)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockContent;
    use crate::id::SequentialIds;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session(types: &[BlockType]) -> EditorSession<SequentialIds> {
        let mut session = EditorSession::with_document(
            DocumentModel::with_ids(SequentialIds::new()),
            SerializeConfig::website(),
        );
        for t in types {
            session.add_block(*t).unwrap();
        }
        session
    }

    fn order(session: &EditorSession<SequentialIds>) -> Vec<&str> {
        session.blocks().iter().map(|b| b.type_name()).collect()
    }

    #[test]
    fn test_insert_selects_new_block() {
        let mut session = session(&[BlockType::Hero]);
        assert_eq!(session.selection().map(BlockId::as_str), Some("block-1"));
        session.duplicate_block("block-1").unwrap();
        assert_eq!(session.selection().map(BlockId::as_str), Some("block-2"));
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut session = session(&[BlockType::Hero, BlockType::Text]);
        session.select("block-1").unwrap();
        session.remove_block("block-1").unwrap();
        assert!(session.selection().is_none());
        assert!(session.select("block-1").is_err());
    }

    #[test]
    fn test_edit_commit() {
        let mut session = session(&[BlockType::Hero]);
        session.begin_edit("block-1").unwrap();
        session.stage("headline", "Sale").unwrap();
        assert!(matches!(session.mode(), EditorMode::Editing { .. }));

        let event = session.commit().unwrap();
        assert_eq!(event, DocumentEvent::ContentPatched { id: "block-1".into() });
        assert!(session.mode().is_viewing());
        let BlockContent::Hero(hero) = &session.blocks()[0].content else {
            panic!("expected hero");
        };
        assert_eq!(hero.headline, "Sale");
    }

    #[test]
    fn test_edit_cancel_discards_draft() {
        let mut session = session(&[BlockType::Hero]);
        let before = session.blocks().to_vec();
        session.begin_style("block-1").unwrap();
        session.stage("backgroundColor", "#000").unwrap();
        session.cancel().unwrap();
        assert!(session.mode().is_viewing());
        assert_eq!(session.blocks(), before.as_slice());
    }

    #[test]
    fn test_commit_and_cancel_require_edit() {
        let mut session = session(&[BlockType::Hero]);
        assert!(matches!(session.commit(), Err(BuilderError::NotEditing)));
        assert!(matches!(session.cancel(), Err(BuilderError::NotEditing)));
        assert!(matches!(session.stage("a", 1), Err(BuilderError::NotEditing)));
        assert!(session.begin_edit("missing").is_err());
    }

    #[test]
    fn test_rejected_commit_keeps_draft() {
        let mut session = session(&[BlockType::Heading]);
        session.begin_edit("block-1").unwrap();
        session.stage("level", "huge").unwrap();
        assert!(matches!(session.commit(), Err(BuilderError::InvalidPatch { .. })));
        assert_eq!(session.mode().draft().map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_style_commit() {
        let mut session = session(&[BlockType::Divider]);
        session.begin_style("block-1").unwrap();
        session.stage_patch(json!({ "borderColor": "#f00" }).as_object().unwrap()).unwrap();
        session.commit().unwrap();
        assert!(session.export_html().contains("border-top: 1px solid #f00"));
    }

    #[test]
    fn test_drag_drop_and_cancel() {
        let mut session = session(&[BlockType::Hero, BlockType::Text, BlockType::Button]);

        assert!(session.begin_drag(0));
        session.drag_over(Some(2));
        session.cancel_drag();
        assert_eq!(order(&session), ["hero", "text", "button"]);

        assert!(session.begin_drag(0));
        session.drag_over(None);
        assert_eq!(session.drop_drag().unwrap(), DocumentEvent::Unchanged);
        assert_eq!(order(&session), ["hero", "text", "button"]);

        assert!(session.begin_drag(0));
        session.drag_over(Some(2));
        let event = session.drop_drag().unwrap();
        assert!(event.is_change());
        assert_eq!(order(&session), ["text", "button", "hero"]);
        assert!(session.drag().is_none());

        assert!(!session.begin_drag(9));
    }

    #[test]
    fn test_observers_see_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut session = session(&[]);
        let sink = Rc::clone(&seen);
        session.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        session.add_block(BlockType::Text).unwrap();
        session.remove_block("nope").unwrap();
        session.remove_block("block-1").unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], DocumentEvent::Inserted { .. }));
        assert!(matches!(seen[1], DocumentEvent::Removed { .. }));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut session = session(&[BlockType::Hero]);
        assert!(session.is_dirty());
        session.mark_saved();
        assert!(!session.is_dirty());

        session.add_block(BlockType::Spacer).unwrap();
        assert!(session.is_dirty());
        session.remove_block("block-2").unwrap();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_canvas_marks_selection() {
        let mut session = session(&[BlockType::Hero, BlockType::Text]);
        session.select("block-1").unwrap();
        let canvas = session.canvas();
        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas[0].get_attr(SELECTED_ATTR), Some("true"));
        assert!(!canvas[1].has_attr(SELECTED_ATTR));
        assert_eq!(canvas[1].get_attr("data-block-type"), Some("text"));
    }

    #[test]
    fn test_preview_and_export() {
        let session = session(&[BlockType::Heading]);
        assert!(session.preview().contains(r#"data-block-id="block-1""#));
        assert!(!session.export_html().contains("data-block-id"));
        assert!(session.view_source().starts_with("<!DOCTYPE html>\n"));
    }

    #[test]
    fn test_empty_session_flavor() {
        let session = EditorSession::new(Flavor::Email);
        assert_eq!(session.flavor(), Flavor::Email);
        assert!(session.export_html().contains("Empty email"));
        assert!(format!("{session:?}").contains("EditorSession"));
    }
}
