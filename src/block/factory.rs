//! Block factory: type → fresh block seeded from schema defaults.

use crate::id::{IdGenerator, TimestampIds};
use crate::schema::BlockSchema;

use super::{Block, BlockType};

/// Creates blocks with fresh ids and deep copies of schema defaults
#[derive(Debug, Clone, Default)]
pub struct BlockFactory<G = TimestampIds> {
    ids: G,
}

impl<G: IdGenerator> BlockFactory<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// New block of a known type
    pub fn create(&mut self, block_type: BlockType) -> Block {
        let entry = BlockSchema::entry(block_type);
        Block::new(self.ids.next_id(), entry.default_content(), entry.default_style())
    }

    /// New block from a wire tag; unknown tags are `None`
    pub fn create_named(&mut self, type_name: &str) -> Option<Block> {
        BlockType::parse(type_name).map(|block_type| self.create(block_type))
    }

    /// Deep copy of `block` under a fresh id
    pub fn duplicate(&mut self, block: &Block) -> Block {
        Block::new(self.ids.next_id(), block.content.clone(), block.style.clone())
    }

    /// Fresh id without creating a block
    pub fn next_id(&mut self) -> crate::id::BlockId {
        self.ids.next_id()
    }
}

/// Create a default block of the named type with a timestamp id
///
/// Returns `None` for unknown types; callers must check before inserting.
pub fn create_default_block(type_name: &str) -> Option<Block> {
    BlockFactory::new(TimestampIds::new()).create_named(type_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockContent;
    use crate::id::SequentialIds;
    use serde_json::json;

    #[test]
    fn test_unknown_type_is_none() {
        assert!(create_default_block("carousel").is_none());
        assert!(create_default_block("").is_none());
    }

    #[test]
    fn test_factory_purity_for_every_type() {
        let mut factory = BlockFactory::new(SequentialIds::new());
        for block_type in BlockType::ALL {
            let a = factory.create(*block_type);
            let b = factory.create(*block_type);
            assert_ne!(a.id, b.id);
            assert_eq!(a.content, b.content);
            assert_eq!(a.style, b.style);
            assert_eq!(a.block_type(), Some(*block_type));
        }
    }

    #[test]
    fn test_mutating_one_block_leaves_others() {
        let mut factory = BlockFactory::new(SequentialIds::new());
        let mut a = factory.create(BlockType::Features);
        let b = factory.create(BlockType::Features);

        if let BlockContent::Features(features) = &mut a.content {
            features.features[0].title = "Changed".into();
        }
        a.patch_style(json!({ "padding": "1px" }).as_object().unwrap());

        let fresh = factory.create(BlockType::Features);
        assert_eq!(b.content, fresh.content);
        assert_eq!(b.style, fresh.style);
        assert_ne!(a.content, b.content);
    }

    #[test]
    fn test_duplicate_gets_new_id() {
        let mut factory = BlockFactory::new(SequentialIds::new());
        let original = factory.create(BlockType::Button);
        let copy = factory.duplicate(&original);
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.content, original.content);
    }

    #[test]
    fn test_create_named() {
        let mut factory = BlockFactory::new(SequentialIds::new());
        let block = factory.create_named("rich_text").unwrap();
        assert_eq!(block.type_name(), "rich_text");
        assert_eq!(block.id, "block-1");
    }
}
