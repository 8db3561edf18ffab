//! Block schema registry.
//!
//! Static, read-only table of every block type: its sidebar label, its
//! category and the template new blocks are seeded from. Entries are not
//! persisted; only blocks are.

mod defaults;

use crate::block::{BlockContent, BlockType};
use crate::config::Flavor;
use crate::style::Style;

// =============================================================================
// Category
// =============================================================================

/// Sidebar grouping of block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Basic,
    Media,
    Layout,
    Marketing,
    Forms,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Basic,
        Category::Media,
        Category::Layout,
        Category::Marketing,
        Category::Forms,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Basic => "Basic",
            Category::Media => "Media",
            Category::Layout => "Layout",
            Category::Marketing => "Marketing",
            Category::Forms => "Forms",
        }
    }
}

// =============================================================================
// SchemaEntry
// =============================================================================

/// One row of the schema registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub block_type: BlockType,
    /// Human label shown in the block palette
    pub label: &'static str,
    pub category: Category,
}

impl SchemaEntry {
    /// Fresh copy of the default content; never shared between blocks
    pub fn default_content(&self) -> BlockContent {
        defaults::content(self.block_type)
    }

    /// Fresh copy of the default style
    pub fn default_style(&self) -> Style {
        defaults::style(self.block_type)
    }
}

// =============================================================================
// BlockSchema
// =============================================================================

/// Registry lookups
pub struct BlockSchema;

impl BlockSchema {
    /// Schema entry of a block type
    pub const fn entry(block_type: BlockType) -> SchemaEntry {
        use BlockType::*;
        use Category::*;

        let (label, category) = match block_type {
            Hero => ("Hero", Marketing),
            Heading => ("Heading", Basic),
            Text => ("Text", Basic),
            RichText => ("Rich Text", Basic),
            Image => ("Image", Media),
            ImageGallery => ("Image Gallery", Media),
            Video => ("Video", Media),
            Button => ("Button", Basic),
            Features => ("Features", Marketing),
            Testimonials => ("Testimonials", Marketing),
            Pricing => ("Pricing", Marketing),
            Form => ("Form", Forms),
            ContactForm => ("Contact Form", Forms),
            Cta => ("Call to Action", Marketing),
            Faq => ("FAQ", Marketing),
            Divider => ("Divider", Layout),
            Spacer => ("Spacer", Layout),
            Columns => ("Columns", Layout),
            List => ("List", Basic),
            Team => ("Team", Marketing),
            Map => ("Map", Media),
            Social => ("Social Links", Marketing),
        };

        SchemaEntry {
            block_type,
            label,
            category,
        }
    }

    /// Entry for a wire tag
    pub fn lookup(type_name: &str) -> Option<SchemaEntry> {
        BlockType::parse(type_name).map(Self::entry)
    }

    /// Every entry, in declaration order
    pub fn entries() -> impl Iterator<Item = SchemaEntry> {
        BlockType::ALL.iter().map(|t| Self::entry(*t))
    }

    /// Block types a builder offers, in palette order
    ///
    /// The email builder leaves out `form`, `map` and the website-only
    /// aliases; the funnel builder leaves out the website aliases and
    /// `team`/`map`. Blocks outside a palette still load and render.
    pub fn palette(flavor: Flavor) -> Vec<SchemaEntry> {
        use BlockType::*;

        Self::entries()
            .filter(|entry| match (flavor, entry.block_type) {
                (_, RichText | ContactForm) => flavor == Flavor::Website,
                (Flavor::Website, Text | Form) => false,
                (Flavor::Email, Form | Map | ImageGallery | Team) => false,
                (Flavor::Funnel, Team | Map) => false,
                _ => true,
            })
            .collect()
    }

    /// Palette grouped by category; empty categories are skipped
    pub fn palette_by_category(flavor: Flavor) -> Vec<(Category, Vec<SchemaEntry>)> {
        let palette = Self::palette(flavor);
        Category::ALL
            .iter()
            .map(|category| {
                let entries: Vec<_> = palette
                    .iter()
                    .filter(|e| e.category == *category)
                    .copied()
                    .collect();
                (*category, entries)
            })
            .filter(|(_, entries)| !entries.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_entry() {
        for block_type in BlockType::ALL {
            let entry = BlockSchema::entry(*block_type);
            assert_eq!(entry.block_type, *block_type);
            assert!(!entry.label.is_empty());
            assert_eq!(entry.default_content().block_type(), Some(*block_type));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(BlockSchema::lookup("cta").map(|e| e.label), Some("Call to Action"));
        assert!(BlockSchema::lookup("marquee").is_none());
    }

    #[test]
    fn test_palettes() {
        let email: Vec<_> = BlockSchema::palette(Flavor::Email)
            .into_iter()
            .map(|e| e.block_type)
            .collect();
        assert!(email.contains(&BlockType::Text));
        assert!(email.contains(&BlockType::Columns));
        assert!(!email.contains(&BlockType::Form));
        assert!(!email.contains(&BlockType::RichText));

        let website: Vec<_> = BlockSchema::palette(Flavor::Website)
            .into_iter()
            .map(|e| e.block_type)
            .collect();
        assert!(website.contains(&BlockType::RichText));
        assert!(website.contains(&BlockType::ContactForm));
        assert!(!website.contains(&BlockType::Text));

        let funnel: Vec<_> = BlockSchema::palette(Flavor::Funnel)
            .into_iter()
            .map(|e| e.block_type)
            .collect();
        assert!(funnel.contains(&BlockType::Form));
        assert!(!funnel.contains(&BlockType::Team));
    }

    #[test]
    fn test_palette_by_category_skips_empty() {
        let groups = BlockSchema::palette_by_category(Flavor::Email);
        assert!(groups.iter().all(|(_, entries)| !entries.is_empty()));
        assert!(!groups.iter().any(|(c, _)| *c == Category::Forms));
    }
}
