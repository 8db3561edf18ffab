//! Error types for blockforge.
//!
//! Only operations that can be handed bad input report errors. Rendering and
//! style resolution never fail: a bad block degrades to a placeholder.

use thiserror::Error;

use crate::id::BlockId;

/// Errors that can occur while editing or loading a document.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// No block with this id exists in the document
    #[error("block not found: {0}")]
    BlockNotFound(BlockId),

    /// A content patch did not fit the block type's content schema
    #[error("invalid patch for {block_type} block {id}: {reason}")]
    InvalidPatch {
        /// Target block
        id: BlockId,
        /// Type tag of the target block
        block_type: String,
        /// Decoder message
        reason: String,
    },

    /// The load payload was not a `{ "blocks": [...] }` document
    #[error("invalid document payload: {0}")]
    InvalidPayload(String),

    /// A commit or cancel arrived while the editor was not editing
    #[error("editor is not editing a block")]
    NotEditing,
}

/// Result type alias for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

impl BuilderError {
    /// Create a patch error from a decoder error.
    pub fn invalid_patch(
        id: &BlockId,
        block_type: impl Into<String>,
        err: impl std::error::Error,
    ) -> Self {
        Self::InvalidPatch {
            id: id.clone(),
            block_type: block_type.into(),
            reason: err.to_string(),
        }
    }

    /// Create a payload error from any error type.
    pub fn payload(err: impl std::error::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuilderError::BlockNotFound(BlockId::from("block-7"));
        assert_eq!(err.to_string(), "block not found: block-7");

        let err = BuilderError::InvalidPayload("expected `blocks`".to_string());
        assert_eq!(err.to_string(), "invalid document payload: expected `blocks`");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BuilderError>();
    }
}
