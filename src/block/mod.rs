//! Blocks: the atomic unit of a document.
//!
//! A [`Block`] is an id, a typed [`BlockContent`] and a [`Style`]. On the
//! wire it is the editor's JSON shape:
//!
//! ```json
//! { "id": "block-1", "type": "hero", "content": { "headline": "..." }, "style": { "padding": "80px 20px" } }
//! ```
//!
//! Decoding never fails on an unknown `type` or on content that does not
//! fit its type: such blocks become [`BlockContent::Unrecognized`], render
//! as a placeholder and save back byte-for-byte.

pub mod content;
mod factory;

pub use content::*;
pub use factory::{BlockFactory, create_default_block};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BuilderError, BuilderResult};
use crate::id::BlockId;
use crate::style::Style;

define_block_types! {
    Hero(HeroContent) => "hero",
    Heading(HeadingContent) => "heading",
    Text(TextContent) => "text",
    /// Website builder name for `text`
    RichText(TextContent) => "rich_text",
    Image(ImageContent) => "image",
    ImageGallery(GalleryContent) => "image_gallery",
    Video(VideoContent) => "video",
    Button(ButtonContent) => "button",
    Features(FeaturesContent) => "features",
    Testimonials(TestimonialsContent) => "testimonials",
    Pricing(PricingContent) => "pricing",
    Form(FormContent) => "form",
    /// Website builder name for `form`
    ContactForm(FormContent) => "contact_form",
    Cta(CtaContent) => "cta",
    Faq(FaqContent) => "faq",
    Divider(EmptyContent) => "divider",
    Spacer(EmptyContent) => "spacer",
    Columns(ColumnsContent) => "columns",
    List(ListContent) => "list",
    Team(TeamContent) => "team",
    Map(MapContent) => "map",
    Social(SocialContent) => "social",
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BlockContent {
    /// Content as a JSON object, for shallow-merge patching
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Decode content leniently: unknown types and misfit content become
    /// `Unrecognized` instead of failing
    pub fn decode_lenient(type_name: &str, value: Value) -> Self {
        let Some(block_type) = BlockType::parse(type_name) else {
            tracing::warn!(block_type = type_name, "unknown block type, keeping as unrecognized");
            return Self::Unrecognized {
                type_name: type_name.to_string(),
                content: value,
            };
        };

        match Self::decode(block_type, value.clone()) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(
                    block_type = type_name,
                    error = %err,
                    "block content does not fit its schema, keeping as unrecognized"
                );
                Self::Unrecognized {
                    type_name: type_name.to_string(),
                    content: value,
                }
            }
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized { .. })
    }
}

// =============================================================================
// Block
// =============================================================================

/// One unit of content + style in a document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    pub id: BlockId,
    pub content: BlockContent,
    pub style: Style,
}

impl Block {
    pub fn new(id: BlockId, content: BlockContent, style: Style) -> Self {
        Self { id, content, style }
    }

    /// Block type; `None` for unrecognized blocks
    pub fn block_type(&self) -> Option<BlockType> {
        self.content.block_type()
    }

    /// Wire tag of the block
    pub fn type_name(&self) -> &str {
        self.content.type_name()
    }

    /// Shallow-merge `patch` into the content
    ///
    /// The merged object is decoded again as the same block type, so a
    /// patch can never change the type. On error the block is unchanged.
    pub fn patch_content(&mut self, patch: &Map<String, Value>) -> BuilderResult<()> {
        let Some(block_type) = self.block_type() else {
            if let BlockContent::Unrecognized { content, .. } = &mut self.content {
                if !content.is_object() {
                    *content = Value::Object(Map::new());
                }
                if let Value::Object(map) = content {
                    merge_into(map, patch);
                }
            }
            return Ok(());
        };

        let invalid =
            |err: serde_json::Error| BuilderError::invalid_patch(&self.id, block_type.as_str(), err);
        let mut map = self.content.to_map().map_err(invalid)?;
        merge_into(&mut map, patch);
        self.content = BlockContent::decode(block_type, Value::Object(map)).map_err(invalid)?;
        Ok(())
    }

    /// Shallow-merge `patch` into the style
    pub fn patch_style(&mut self, patch: &Map<String, Value>) {
        self.style.merge(patch);
    }
}

fn merge_into(map: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        map.insert(key.clone(), value.clone());
    }
}

impl Serialize for Block {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Block", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", self.type_name())?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("style", &self.style)?;
        state.end()
    }
}

/// Wire shape before typed decoding
///
/// Everything is defaulted: a missing id becomes empty (the document
/// assigns a fresh one on load), a numeric id becomes its decimal text, a
/// non-object style becomes empty.
#[derive(Deserialize)]
struct RawBlock {
    #[serde(default)]
    id: Value,
    #[serde(rename = "type", default)]
    type_name: String,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    style: Value,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        let content = match raw.content {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        Self {
            id: match raw.id {
                Value::String(id) => BlockId::from(id),
                Value::Number(n) => BlockId::new(n.to_string()),
                _ => BlockId::new(""),
            },
            content: BlockContent::decode_lenient(&raw.type_name, content),
            style: Style::from_value(raw.style),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
