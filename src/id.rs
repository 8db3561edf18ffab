//! Block identity
//!
//! Every block carries an opaque [`BlockId`] that stays the same for the
//! block's whole lifetime. The editor uses it as the drag-and-drop key and as
//! the edit target, so it must be unique within a document.
//!
//! Ids are produced by an [`IdGenerator`] injected into the block factory:
//!
//! - [`TimestampIds`]: `block-<millis>-<suffix>`, the default. Collision
//!   resistant within a session, not a security boundary.
//! - [`SequentialIds`]: `block-1`, `block-2`, ... for deterministic tests.

use std::fmt;

use compact_str::{CompactString, format_compact};
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};

// =============================================================================
// BlockId
// =============================================================================

/// Opaque, stable block identifier
///
/// Stored as a `CompactString`: ids are short and inline without a heap
/// allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(CompactString);

impl BlockId {
    /// Create an id from any string
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(CompactString::new(id))
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        Self(CompactString::from(s))
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BlockId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// IdGenerator
// =============================================================================

/// Source of fresh block ids
pub trait IdGenerator {
    /// Produce an id that has not been returned before by this generator
    fn next_id(&mut self) -> BlockId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> BlockId {
        (**self).next_id()
    }
}

/// Length of the random suffix appended to timestamp ids
const SUFFIX_LEN: usize = 9;

/// Timestamp + random suffix ids: `block-1718000000000-k3j9x0a2b`
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last_millis: i64,
    counter: u32,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> BlockId {
        let millis = chrono::Utc::now().timestamp_millis();
        // Same-millisecond bursts (duplicate + insert in one tick) also get
        // a counter so ids stay unique even with an unlucky suffix.
        if millis == self.last_millis {
            self.counter += 1;
        } else {
            self.last_millis = millis;
            self.counter = 0;
        }

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();

        if self.counter == 0 {
            BlockId(format_compact!("block-{millis}-{suffix}"))
        } else {
            BlockId(format_compact!("block-{millis}-{}{suffix}", self.counter))
        }
    }
}

/// Deterministic ids for tests and fixtures: `block-1`, `block-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: CompactString,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix("block")
    }

    /// Use a custom prefix (`"email"` → `email-1`, `email-2`, ...)
    pub fn with_prefix(prefix: impl AsRef<str>) -> Self {
        Self {
            prefix: CompactString::new(prefix),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> BlockId {
        let id = BlockId(format_compact!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

// =============================================================================
// Tests
// =============================================================================
