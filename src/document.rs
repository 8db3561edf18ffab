//! Document model: the ordered block list of one artifact
//!
//! Array order is render order. Blocks change only through the operations
//! here (or their reducer form, [`DocumentModel::apply`]), which keep two
//! invariants: every id is unique, and the order is total.
//!
//! ```
//! use blockforge::block::BlockType;
//! use blockforge::document::DocumentModel;
//! use blockforge::id::SequentialIds;
//!
//! let mut doc = DocumentModel::with_ids(SequentialIds::new());
//! doc.insert(BlockType::Hero);
//! doc.insert(BlockType::Text);
//! let copy = doc.duplicate("block-1").unwrap().id.clone();
//!
//! let order: Vec<_> = doc.blocks().iter().map(|b| b.id.as_str()).collect();
//! assert_eq!(order, ["block-1", copy.as_str(), "block-2"]);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::block::{Block, BlockFactory, BlockType};
use crate::error::{BuilderError, BuilderResult};
use crate::hash::StableHasher;
use crate::id::{BlockId, IdGenerator, TimestampIds};

// =============================================================================
// Actions and events
// =============================================================================

/// A document mutation, for reducer-style dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentAction {
    /// Insert a default block; appended when `index` is `None` or past the end
    Insert {
        block_type: BlockType,
        index: Option<usize>,
    },
    Remove {
        id: BlockId,
    },
    Duplicate {
        id: BlockId,
    },
    /// Reorder; `to: None` is a cancelled drag
    Move {
        from: usize,
        to: Option<usize>,
    },
    PatchContent {
        id: BlockId,
        patch: Map<String, Value>,
    },
    PatchStyle {
        id: BlockId,
        patch: Map<String, Value>,
    },
}

/// What an applied action changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    Inserted { id: BlockId, index: usize },
    Removed { id: BlockId, index: usize },
    Duplicated { source: BlockId, id: BlockId, index: usize },
    Moved { id: BlockId, from: usize, to: usize },
    ContentPatched { id: BlockId },
    StylePatched { id: BlockId },
    /// The action was a no-op (unknown id on remove, invalid move target)
    Unchanged,
}

impl DocumentEvent {
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Block the event is about; for duplicates, the new copy
    pub fn block_id(&self) -> Option<&BlockId> {
        match self {
            Self::Inserted { id, .. }
            | Self::Removed { id, .. }
            | Self::Duplicated { id, .. }
            | Self::Moved { id, .. }
            | Self::ContentPatched { id }
            | Self::StylePatched { id } => Some(id),
            Self::Unchanged => None,
        }
    }
}

// =============================================================================
// Payload
// =============================================================================

/// Persisted shape: `{ "blocks": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPayload {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Pull the block array out of any accepted payload shape
fn payload_blocks(value: Value) -> BuilderResult<Vec<Value>> {
    match value {
        Value::Array(blocks) => Ok(blocks),
        Value::Object(mut map) => {
            if let Some(Value::Array(blocks)) = map.remove("blocks") {
                return Ok(blocks);
            }
            match map.remove("content") {
                Some(Value::Object(mut content)) => match content.remove("blocks") {
                    Some(Value::Array(blocks)) => Ok(blocks),
                    _ => Err(BuilderError::InvalidPayload("`content` has no `blocks` array".into())),
                },
                _ => Err(BuilderError::InvalidPayload("expected a `blocks` array".into())),
            }
        }
        other => Err(BuilderError::InvalidPayload(format!(
            "expected an object or array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// DocumentModel
// =============================================================================

/// Ordered, mutable block list of one email, page or funnel step
#[derive(Debug, Clone, Default)]
pub struct DocumentModel<G = TimestampIds> {
    blocks: Vec<Block>,
    factory: BlockFactory<G>,
}

impl DocumentModel<TimestampIds> {
    /// Empty document with timestamp ids
    pub fn new() -> Self {
        Self::with_ids(TimestampIds::new())
    }

    /// Load a `{ "blocks": [...] }` payload (or a bare block array)
    pub fn load(value: Value) -> BuilderResult<Self> {
        Self::load_with(value, TimestampIds::new())
    }

    /// Parse and load a JSON payload
    pub fn from_json(json: &str) -> BuilderResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(BuilderError::payload)?;
        Self::load(value)
    }
}

impl<G: IdGenerator> DocumentModel<G> {
    /// Empty document drawing ids from `ids`
    pub fn with_ids(ids: G) -> Self {
        Self {
            blocks: Vec::new(),
            factory: BlockFactory::new(ids),
        }
    }

    /// Document from already-decoded blocks
    ///
    /// Blocks with an empty or repeated id get a fresh one, so the id
    /// invariant holds for hand-edited payloads too.
    pub fn from_blocks(blocks: Vec<Block>, ids: G) -> Self {
        let mut doc = Self::with_ids(ids);
        doc.adopt(blocks);
        doc
    }

    /// Load a payload with a custom id source
    ///
    /// Non-object entries of the block array are skipped with a warning.
    pub fn load_with(value: Value, ids: G) -> BuilderResult<Self> {
        let raw = payload_blocks(value)?;
        let mut blocks = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            if !entry.is_object() {
                tracing::warn!(index, kind = json_kind(&entry), "skipping non-object block entry");
                continue;
            }
            blocks.push(serde_json::from_value(entry).map_err(BuilderError::payload)?);
        }
        let doc = Self::from_blocks(blocks, ids);
        tracing::debug!(blocks = doc.len(), "loaded document");
        Ok(doc)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Blocks in render order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Block> {
        let id = id.as_ref();
        self.blocks.iter().find(|b| b.id.as_str() == id)
    }

    pub fn index_of(&self, id: impl AsRef<str>) -> Option<usize> {
        let id = id.as_ref();
        self.blocks.iter().position(|b| b.id.as_str() == id)
    }

    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.index_of(id).is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a default block of `block_type`; returns it for selection
    pub fn insert(&mut self, block_type: BlockType) -> &Block {
        self.insert_at(usize::MAX, block_type)
    }

    /// Append a default block by wire tag; unknown tags insert nothing
    pub fn insert_named(&mut self, type_name: &str) -> Option<&Block> {
        match BlockType::parse(type_name) {
            Some(block_type) => Some(self.insert(block_type)),
            None => {
                tracing::debug!(block_type = type_name, "ignoring insert of unknown block type");
                None
            }
        }
    }

    /// Insert a default block at `index`; past the end appends
    pub fn insert_at(&mut self, index: usize, block_type: BlockType) -> &Block {
        let block = self.factory.create(block_type);
        let block = self.ensure_unique(block);
        let index = index.min(self.blocks.len());
        tracing::debug!(block_id = %block.id, block_type = %block_type, index, "insert block");
        self.blocks.insert(index, block);
        &self.blocks[index]
    }

    /// Remove a block; `None` when no block has this id
    pub fn remove(&mut self, id: impl AsRef<str>) -> Option<Block> {
        let index = self.index_of(&id)?;
        let block = self.blocks.remove(index);
        tracing::debug!(block_id = %block.id, block_type = block.type_name(), index, "remove block");
        Some(block)
    }

    /// Deep copy of a block under a new id, placed right after the original
    pub fn duplicate(&mut self, id: impl AsRef<str>) -> Option<&Block> {
        let index = self.index_of(&id)?;
        let copy = self.factory.duplicate(&self.blocks[index]);
        let copy = self.ensure_unique(copy);
        tracing::debug!(
            source = id.as_ref(),
            block_id = %copy.id,
            block_type = copy.type_name(),
            index = index + 1,
            "duplicate block"
        );
        self.blocks.insert(index + 1, copy);
        Some(&self.blocks[index + 1])
    }

    /// Move the block at `from` to `to`
    ///
    /// `to` is the block's index after the move. A missing target (the drag
    /// was cancelled) or an out-of-range index leaves the order unchanged.
    pub fn move_block(&mut self, from: usize, to: Option<usize>) -> bool {
        let Some(to) = to else {
            return false;
        };
        if from >= self.blocks.len() || to >= self.blocks.len() {
            tracing::debug!(from, to, len = self.blocks.len(), "ignoring out-of-range move");
            return false;
        }
        if from == to {
            return true;
        }
        let block = self.blocks.remove(from);
        tracing::debug!(block_id = %block.id, from, to, "move block");
        self.blocks.insert(to, block);
        true
    }

    /// Shallow-merge `patch` into a block's content
    pub fn patch_content(&mut self, id: impl AsRef<str>, patch: &Map<String, Value>) -> BuilderResult<()> {
        let block = self.block_mut(id.as_ref())?;
        if let Err(err) = block.patch_content(patch) {
            tracing::warn!(block_id = %block.id, error = %err, "rejected content patch");
            return Err(err);
        }
        tracing::debug!(block_id = %block.id, block_type = block.type_name(), keys = patch.len(), "patch content");
        Ok(())
    }

    /// Shallow-merge `patch` into a block's style
    pub fn patch_style(&mut self, id: impl AsRef<str>, patch: &Map<String, Value>) -> BuilderResult<()> {
        let block = self.block_mut(id.as_ref())?;
        block.patch_style(patch);
        tracing::debug!(block_id = %block.id, block_type = block.type_name(), keys = patch.len(), "patch style");
        Ok(())
    }

    /// Apply an action, reporting what changed
    pub fn apply(&mut self, action: DocumentAction) -> BuilderResult<DocumentEvent> {
        let event = match action {
            DocumentAction::Insert { block_type, index } => {
                let index = index.unwrap_or(usize::MAX).min(self.blocks.len());
                let id = self.insert_at(index, block_type).id.clone();
                DocumentEvent::Inserted { id, index }
            }
            DocumentAction::Remove { id } => match self.index_of(&id) {
                Some(index) => {
                    self.remove(&id);
                    DocumentEvent::Removed { id, index }
                }
                None => DocumentEvent::Unchanged,
            },
            DocumentAction::Duplicate { id } => {
                let index = self.index_of(&id).ok_or_else(|| BuilderError::BlockNotFound(id.clone()))?;
                let copy = self
                    .duplicate(&id)
                    .map(|b| b.id.clone())
                    .ok_or_else(|| BuilderError::BlockNotFound(id.clone()))?;
                DocumentEvent::Duplicated {
                    source: id,
                    id: copy,
                    index: index + 1,
                }
            }
            DocumentAction::Move { from, to } => {
                let id = self.blocks.get(from).map(|b| b.id.clone());
                match (id, to) {
                    (Some(id), Some(to)) if from != to && self.move_block(from, Some(to)) => {
                        DocumentEvent::Moved { id, from, to }
                    }
                    _ => DocumentEvent::Unchanged,
                }
            }
            DocumentAction::PatchContent { id, patch } => {
                self.patch_content(&id, &patch)?;
                DocumentEvent::ContentPatched { id }
            }
            DocumentAction::PatchStyle { id, patch } => {
                self.patch_style(&id, &patch)?;
                DocumentEvent::StylePatched { id }
            }
        };
        Ok(event)
    }

    /// Replace every block, e.g. after picking a template
    pub fn replace_blocks(&mut self, blocks: Vec<Block>) {
        self.blocks.clear();
        self.adopt(blocks);
        tracing::debug!(blocks = self.len(), "replaced document blocks");
    }

    /// Take ownership of loaded blocks, repairing empty or repeated ids
    fn adopt(&mut self, blocks: Vec<Block>) {
        let taken: FxHashSet<BlockId> = blocks.iter().map(|b| b.id.clone()).collect();
        let mut seen = FxHashSet::default();

        for mut block in blocks {
            if block.id.as_str().is_empty() || seen.contains(&block.id) {
                let fresh = loop {
                    let id = self.factory.next_id();
                    if !taken.contains(&id) && !seen.contains(&id) {
                        break id;
                    }
                };
                tracing::warn!(
                    old_id = %block.id,
                    new_id = %fresh,
                    block_type = block.type_name(),
                    "reassigned missing or duplicate block id"
                );
                block.id = fresh;
            }
            seen.insert(block.id.clone());
            self.blocks.push(block);
        }
    }

    fn block_mut(&mut self, id: &str) -> BuilderResult<&mut Block> {
        self.blocks
            .iter_mut()
            .find(|b| b.id.as_str() == id)
            .ok_or_else(|| BuilderError::BlockNotFound(BlockId::new(id)))
    }

    /// Give `block` a fresh id while its id is already in use
    fn ensure_unique(&mut self, mut block: Block) -> Block {
        while self.contains(&block.id) {
            block.id = self.factory.next_id();
        }
        block
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Payload to hand back to the backend
    pub fn to_payload(&self) -> DocumentPayload {
        DocumentPayload {
            blocks: self.blocks.clone(),
        }
    }

    /// `{ "blocks": [...] }` as a JSON value
    pub fn to_value(&self) -> BuilderResult<Value> {
        let blocks = serde_json::to_value(&self.blocks).map_err(BuilderError::payload)?;
        let mut map = Map::new();
        map.insert("blocks".to_string(), blocks);
        Ok(Value::Object(map))
    }

    /// `{ "blocks": [...] }` as JSON text
    pub fn to_json(&self) -> BuilderResult<String> {
        serde_json::to_string(&self.to_value()?).map_err(BuilderError::payload)
    }

    /// Stable hash of the saved form; equal documents hash equal across runs
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = StableHasher::new().update_usize(self.blocks.len());
        for block in &self.blocks {
            let content = serde_json::to_string(&block.content).unwrap_or_default();
            let style = serde_json::to_string(&block.style).unwrap_or_default();
            hasher = hasher
                .update_str(block.id.as_str())
                .update_str(block.type_name())
                .update_str(&content)
                .update_str(&style);
        }
        hasher.finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
