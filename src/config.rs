//! Builder flavors and rendering configuration.
//!
//! All three builders share one block model; a [`Flavor`] selects the
//! document shell and the markup strategy (tables for email clients,
//! div/flex layouts for browsers).

use serde::{Deserialize, Serialize};

// =============================================================================
// Flavor
// =============================================================================

/// Which builder a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Email,
    #[default]
    Website,
    Funnel,
}

impl Flavor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Flavor::Email => "email",
            Flavor::Website => "website",
            Flavor::Funnel => "funnel",
        }
    }

    /// Email clients need table layout and cannot run forms, iframes or video
    #[inline]
    pub const fn is_email(self) -> bool {
        matches!(self, Flavor::Email)
    }

    /// Text shown in place of an empty document
    pub const fn empty_placeholder(self) -> &'static str {
        match self {
            Flavor::Email => "Empty email",
            Flavor::Website | Flavor::Funnel => "Empty page",
        }
    }
}

// =============================================================================
// RenderConfig
// =============================================================================

/// Default attribute name for block ids in rendered output.
pub const DEFAULT_ID_ATTR: &str = "data-block-id";

/// Configuration for block rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Whether HTML output carries block id attributes. Canvas output always
    /// does; the preview iframe uses them to map clicks back to blocks.
    pub emit_block_ids: bool,
    /// Attribute name for block ids (default: "data-block-id").
    ///
    /// This allows hosts to customize the attribute name if needed
    /// to avoid conflicts with their own attributes.
    pub id_attr_name: String,
}

impl RenderConfig {
    /// Preview config (emit ids).
    pub const PREVIEW: Self = Self {
        emit_block_ids: true,
        id_attr_name: String::new(), // Will use DEFAULT_ID_ATTR
    };

    /// Export config (clean markup, no ids).
    pub const EXPORT: Self = Self {
        emit_block_ids: false,
        id_attr_name: String::new(),
    };

    /// Create a new config.
    pub fn new(emit_block_ids: bool) -> Self {
        Self {
            emit_block_ids,
            id_attr_name: DEFAULT_ID_ATTR.to_string(),
        }
    }

    /// Set custom attribute name for block ids.
    pub fn with_id_attr(mut self, attr_name: impl Into<String>) -> Self {
        self.id_attr_name = attr_name.into();
        self
    }

    /// Get the attribute name for block ids.
    pub fn id_attr(&self) -> &str {
        if self.id_attr_name.is_empty() {
            DEFAULT_ID_ATTR
        } else {
            &self.id_attr_name
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::EXPORT
    }
}

// =============================================================================
// SerializeConfig
// =============================================================================

/// Email content column width in pixels
pub const EMAIL_CONTENT_WIDTH: u32 = 600;

/// Configuration for full-document serialization.
///
/// Deserializable with defaults, so a host can keep it in its own settings:
///
/// ```
/// use blockforge::config::{Flavor, SerializeConfig};
///
/// let config: SerializeConfig = serde_json::from_str(r#"{ "flavor": "email", "title": "Spring sale" }"#).unwrap();
/// assert_eq!(config.flavor, Flavor::Email);
/// assert_eq!(config.content_width, 600);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SerializeConfigFields")]
pub struct SerializeConfig {
    pub flavor: Flavor,
    /// `<title>` of the document
    pub title: String,
    /// Body background; flavor default when `None`
    pub body_background: Option<String>,
    /// Width of the email content column
    pub content_width: u32,
    pub render: RenderConfig,
}

impl SerializeConfig {
    pub fn for_flavor(flavor: Flavor) -> Self {
        Self {
            flavor,
            title: match flavor {
                Flavor::Email => "Email",
                Flavor::Website => "Page",
                Flavor::Funnel => "Funnel step",
            }
            .to_string(),
            body_background: None,
            content_width: EMAIL_CONTENT_WIDTH,
            render: RenderConfig::EXPORT,
        }
    }

    pub fn email() -> Self {
        Self::for_flavor(Flavor::Email)
    }

    pub fn website() -> Self {
        Self::for_flavor(Flavor::Website)
    }

    pub fn funnel() -> Self {
        Self::for_flavor(Flavor::Funnel)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Body background, falling back to the flavor's default
    pub fn background(&self) -> &str {
        match &self.body_background {
            Some(bg) if !bg.is_empty() => bg.as_str(),
            _ if self.flavor.is_email() => "#f4f4f5",
            _ => "#ffffff",
        }
    }
}

/// Deserialized form; missing fields take the flavor's defaults
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerializeConfigFields {
    #[serde(default)]
    flavor: Flavor,
    title: Option<String>,
    body_background: Option<String>,
    content_width: Option<u32>,
    render: Option<RenderConfig>,
}

impl From<SerializeConfigFields> for SerializeConfig {
    fn from(fields: SerializeConfigFields) -> Self {
        let defaults = Self::for_flavor(fields.flavor);
        Self {
            title: fields.title.unwrap_or(defaults.title),
            body_background: fields.body_background,
            content_width: fields.content_width.unwrap_or(defaults.content_width),
            render: fields.render.unwrap_or(defaults.render),
            ..defaults
        }
    }
}

impl Default for SerializeConfig {
    fn default() -> Self {
        Self::website()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_id_attr() {
        assert_eq!(RenderConfig::PREVIEW.id_attr(), "data-block-id");
        let config = RenderConfig::new(true).with_id_attr("data-fb-id");
        assert_eq!(config.id_attr(), "data-fb-id");
    }

    #[test]
    fn test_flavor_serde() {
        let flavor: Flavor = serde_json::from_str("\"funnel\"").unwrap();
        assert_eq!(flavor, Flavor::Funnel);
        assert_eq!(serde_json::to_string(&Flavor::Email).unwrap(), "\"email\"");
    }

    #[test]
    fn test_background_defaults() {
        assert_eq!(SerializeConfig::email().background(), "#f4f4f5");
        assert_eq!(SerializeConfig::website().background(), "#ffffff");

        let config = SerializeConfig {
            body_background: Some("#000".into()),
            ..SerializeConfig::funnel()
        };
        assert_eq!(config.background(), "#000");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SerializeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SerializeConfig::website());
        assert!(!config.render.emit_block_ids);
    }

    #[test]
    fn test_deserialize_uses_flavor_defaults() {
        let config: SerializeConfig = serde_json::from_str(r#"{ "flavor": "email" }"#).unwrap();
        assert_eq!(config, SerializeConfig::email());
        assert_eq!(config.title, "Email");

        let config: SerializeConfig =
            serde_json::from_str(r#"{ "flavor": "funnel", "title": "Step 2", "contentWidth": 640 }"#).unwrap();
        assert_eq!(config.title, "Step 2");
        assert_eq!(config.content_width, 640);
        assert_eq!(config.render, RenderConfig::EXPORT);
    }
}
