//! Typed content payloads, one struct per block type.
//!
//! Every field is optional on the wire (`#[serde(default)]`): a block saved
//! by an older editor, or hand-edited, still decodes. Top-level fields this
//! crate does not model land in `extra` and are written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields not modelled by a content struct, preserved across load/save
pub type Extra = Map<String, Value>;

// =============================================================================
// Basic
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingContent {
    pub text: String,
    /// 1-6; anything else renders as `<h2>`
    pub level: u8,
    #[serde(flatten)]
    pub extra: Extra,
}

impl HeadingContent {
    /// Tag name for the heading level
    pub fn tag(&self) -> &'static str {
        match self.level {
            1 => "h1",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            6 => "h6",
            _ => "h2",
        }
    }
}

/// Shared by `text` and `rich_text`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextContent {
    pub text: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonContent {
    pub text: String,
    pub link: String,
    pub open_in_new_tab: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListContent {
    pub items: Vec<String>,
    /// `ordered`/`numbered` render `<ol>`, anything else `<ul>`
    pub list_type: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ListContent {
    pub fn is_ordered(&self) -> bool {
        matches!(self.list_type.as_str(), "ordered" | "numbered" | "ol")
    }
}

/// Content of blocks that are pure style (`divider`, `spacer`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmptyContent {
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnsContent {
    pub columns: Vec<Column>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
    pub content: String,
}

// =============================================================================
// Media
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageContent {
    pub src: String,
    pub alt: String,
    /// Wraps the image in an anchor when non-empty
    pub link: String,
    pub caption: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryContent {
    pub images: Vec<GalleryImage>,
    /// Images per row; 0 means the default of 3
    pub columns: u8,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoContent {
    pub url: String,
    pub title: String,
    /// Poster image; email output links it to the video
    pub thumbnail: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapContent {
    pub address: String,
    /// Google Maps zoom level; 0 means the default of 14
    pub zoom: u8,
    #[serde(flatten)]
    pub extra: Extra,
}

// =============================================================================
// Marketing
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesContent {
    pub headline: String,
    pub subheadline: String,
    pub features: Vec<FeatureItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    /// Emoji or short glyph shown above the title
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub headline: String,
    pub testimonials: Vec<Testimonial>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingContent {
    pub headline: String,
    pub subheadline: String,
    pub plans: Vec<PricingPlan>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub button_text: String,
    pub button_link: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaContent {
    pub headline: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqContent {
    pub headline: String,
    pub items: Vec<FaqItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamContent {
    pub headline: String,
    pub members: Vec<TeamMember>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub photo: String,
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialContent {
    pub links: Vec<SocialLink>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

// =============================================================================
// Forms
// =============================================================================

/// Shared by `form` and `contact_form`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormContent {
    pub headline: String,
    pub description: String,
    pub fields: Vec<FormField>,
    pub submit_text: String,
    /// Submission endpoint; email output links the button here
    pub action: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    pub label: String,
    /// `text`, `email`, `tel`, `textarea`, ...
    #[serde(rename = "type")]
    pub field_type: String,
    pub placeholder: String,
    pub required: bool,
}

impl FormField {
    /// Input type attribute; empty means `text`
    pub fn input_type(&self) -> &str {
        if self.field_type.is_empty() {
            "text"
        } else {
            &self.field_type
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let hero: HeroContent = serde_json::from_value(json!({ "headline": "Hi" })).unwrap();
        assert_eq!(hero.headline, "Hi");
        assert!(hero.button_text.is_empty());
    }

    #[test]
    fn test_unmodelled_fields_survive() {
        let value = json!({ "text": "Go", "link": "/go", "trackingId": "cmp-7" });
        let button: ButtonContent = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(button.extra.get("trackingId"), Some(&json!("cmp-7")));

        let back = serde_json::to_value(&button).unwrap();
        assert_eq!(back["trackingId"], "cmp-7");
        assert_eq!(back["openInNewTab"], false);
    }

    #[test]
    fn test_form_field_type_rename() {
        let field: FormField =
            serde_json::from_value(json!({ "name": "email", "type": "email" })).unwrap();
        assert_eq!(field.input_type(), "email");
        assert_eq!(FormField::default().input_type(), "text");
    }

    #[test]
    fn test_heading_tag() {
        let mut heading = HeadingContent { level: 1, ..Default::default() };
        assert_eq!(heading.tag(), "h1");
        heading.level = 9;
        assert_eq!(heading.tag(), "h2");
    }

    #[test]
    fn test_list_ordering() {
        let list = ListContent { list_type: "numbered".into(), ..Default::default() };
        assert!(list.is_ordered());
        assert!(!ListContent::default().is_ordered());
    }
}
