//! Block rendering
//!
//! Every block type has one template that builds an [`Element`] tree from
//! the block's content and style. The same tree serves both outputs:
//!
//! - [`RenderMode::Canvas`]: the tree is returned for a UI layer to mount.
//!   The root carries `data-block-id`/`data-block-type`, editable text nodes
//!   carry `data-field` + `contenteditable`.
//! - [`RenderMode::Html`]: the tree is written by [`crate::html`] into an
//!   HTML fragment.
//!
//! Templates differ by [`Flavor`]: email output uses presentation tables and
//! degrades interactive blocks (video, form, map) to links; website and
//! funnel output uses div/grid layouts and real embeds.
//!
//! ```
//! use blockforge::block::{BlockFactory, BlockType};
//! use blockforge::config::{Flavor, RenderConfig};
//! use blockforge::id::SequentialIds;
//! use blockforge::render::BlockRenderer;
//!
//! let mut factory = BlockFactory::new(SequentialIds::new());
//! let block = factory.create(BlockType::Heading);
//!
//! let renderer = BlockRenderer::new(Flavor::Website, RenderConfig::EXPORT);
//! assert_eq!(renderer.render_html(&block), r#"<h2 style="color: #111827; text-align: left; padding: 10px 20px; margin: 0">Your Heading Here</h2>"#);
//! ```

mod basic;
mod form;
mod marketing;
mod media;
pub mod url;

use std::borrow::Cow;

use crate::block::{Block, BlockContent};
use crate::config::{Flavor, RenderConfig};
use crate::html;
use crate::node::Element;
use crate::style::Style;

// =============================================================================
// Modes and results
// =============================================================================

/// Output kind of a render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Interactive tree for the editor canvas
    Canvas,
    /// Static HTML fragment for preview and export
    #[default]
    Html,
}

/// Result of rendering one block
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Canvas(Element),
    Html(String),
}

impl Rendered {
    pub fn as_canvas(&self) -> Option<&Element> {
        match self {
            Self::Canvas(elem) => Some(elem),
            Self::Html(_) => None,
        }
    }

    pub fn as_html(&self) -> Option<&str> {
        match self {
            Self::Html(html) => Some(html),
            Self::Canvas(_) => None,
        }
    }

    /// HTML text of either variant; a canvas tree is written out as-is
    pub fn into_html(self) -> String {
        match self {
            Self::Html(html) => html,
            Self::Canvas(elem) => html::render_to_string(&elem),
        }
    }
}

// =============================================================================
// BlockRenderer
// =============================================================================

/// Renders blocks for one builder flavor
#[derive(Debug, Clone, Default)]
pub struct BlockRenderer {
    flavor: Flavor,
    config: RenderConfig,
}

impl BlockRenderer {
    pub fn new(flavor: Flavor, config: RenderConfig) -> Self {
        Self { flavor, config }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a block in the given mode
    pub fn render(&self, block: &Block, mode: RenderMode) -> Rendered {
        let tree = self.tree(block, mode);
        match mode {
            RenderMode::Canvas => Rendered::Canvas(tree),
            RenderMode::Html => Rendered::Html(html::render_to_string(&tree)),
        }
    }

    /// Canvas tree of a block
    pub fn render_canvas(&self, block: &Block) -> Element {
        self.tree(block, RenderMode::Canvas)
    }

    /// HTML fragment of a block
    pub fn render_html(&self, block: &Block) -> String {
        html::render_to_string(&self.tree(block, RenderMode::Html))
    }

    /// HTML fragment of every block, in order
    pub fn render_all_html(&self, blocks: &[Block]) -> String {
        let trees: Vec<_> = blocks.iter().map(|b| self.tree(b, RenderMode::Html)).collect();
        html::render_all(&trees)
    }

    /// Element tree of a block, as built for `mode`
    pub fn tree(&self, block: &Block, mode: RenderMode) -> Element {
        let cx = Ctx {
            mode,
            flavor: self.flavor,
            block,
        };
        let root = template(&cx);
        self.mark_root(root, block, mode)
    }

    fn mark_root(&self, mut root: Element, block: &Block, mode: RenderMode) -> Element {
        match mode {
            RenderMode::Canvas => {
                root.set_attr(self.config.id_attr(), block.id.as_str());
                root.set_attr("data-block-type", block.type_name());
            }
            RenderMode::Html if self.config.emit_block_ids => {
                root.set_attr(self.config.id_attr(), block.id.as_str());
            }
            RenderMode::Html => {}
        }
        root
    }
}

fn template(cx: &Ctx<'_>) -> Element {
    match &cx.block.content {
        BlockContent::Hero(c) => marketing::hero(cx, c),
        BlockContent::Heading(c) => basic::heading(cx, c),
        BlockContent::Text(c) | BlockContent::RichText(c) => basic::text(cx, c),
        BlockContent::Image(c) => basic::image(cx, c),
        BlockContent::ImageGallery(c) => media::gallery(cx, c),
        BlockContent::Video(c) => media::video(cx, c),
        BlockContent::Button(c) => basic::button(cx, c),
        BlockContent::Features(c) => marketing::features(cx, c),
        BlockContent::Testimonials(c) => marketing::testimonials(cx, c),
        BlockContent::Pricing(c) => marketing::pricing(cx, c),
        BlockContent::Form(c) | BlockContent::ContactForm(c) => form::form(cx, c),
        BlockContent::Cta(c) => marketing::cta(cx, c),
        BlockContent::Faq(c) => marketing::faq(cx, c),
        BlockContent::Divider(_) => basic::divider(cx),
        BlockContent::Spacer(_) => basic::spacer(cx),
        BlockContent::Columns(c) => basic::columns(cx, c),
        BlockContent::List(c) => basic::list(cx, c),
        BlockContent::Team(c) => marketing::team(cx, c),
        BlockContent::Map(c) => media::map(cx, c),
        BlockContent::Social(c) => marketing::social(cx, c),
        BlockContent::Unrecognized { type_name, .. } => placeholder(cx, type_name),
    }
}

fn placeholder(cx: &Ctx<'_>, type_name: &str) -> Element {
    tracing::warn!(
        block_id = %cx.block.id,
        block_type = type_name,
        "rendering placeholder for unrecognized block"
    );
    let label = if type_name.is_empty() {
        "Unsupported block".to_string()
    } else {
        format!("Unsupported block: {type_name}")
    };
    Element::new("div")
        .with_style(
            "padding: 20px; border: 1px dashed #d1d5db; color: #6b7280; \
             text-align: center; font-size: 14px; font-family: sans-serif",
        )
        .text(label)
}

// =============================================================================
// Template context
// =============================================================================

/// Per-render state handed to every template
pub(crate) struct Ctx<'a> {
    pub mode: RenderMode,
    pub flavor: Flavor,
    pub block: &'a Block,
}

impl Ctx<'_> {
    #[inline]
    pub fn is_canvas(&self) -> bool {
        self.mode == RenderMode::Canvas
    }

    #[inline]
    pub fn is_email(&self) -> bool {
        self.flavor.is_email()
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.block.style
    }

    /// Mark an element as editing `field` of the content (canvas only)
    pub fn field(&self, elem: Element, field: impl Into<String>) -> Element {
        if self.is_canvas() {
            elem.attr("data-field", field).attr("contenteditable", "true")
        } else {
            elem
        }
    }

    /// Text element editing `field`
    pub fn text_elem(&self, tag: &str, text: &str, field: impl Into<String>, style: &str) -> Element {
        self.field(Element::new(tag), field).with_style(style).text(text)
    }

    /// Text element for an optional content field
    ///
    /// Empty text is dropped from HTML output but kept on the canvas so the
    /// field stays editable.
    pub fn text_field(
        &self,
        tag: &str,
        text: &str,
        field: impl Into<String>,
        style: &str,
    ) -> Option<Element> {
        if text.is_empty() && !self.is_canvas() {
            return None;
        }
        Some(self.text_elem(tag, text, field, style))
    }

    /// Full-width block container: a presentation table cell for email, a
    /// `<section>` otherwise
    pub fn section(&self, style: String, children: impl IntoIterator<Item = Element>) -> Element {
        if self.is_email() {
            let cell = Element::new("td").with_style(style).children(children);
            presentation_table().child(Element::new("tr").child(cell))
        } else {
            Element::new("section").with_style(style).children(children)
        }
    }

    /// Repeated items in columns
    ///
    /// Email output is a table with `columns` cells per row (default: up to
    /// three). Web output is a CSS grid: fixed `columns` or auto-fit.
    pub fn grid(&self, items: Vec<Element>, columns: Option<usize>) -> Element {
        if self.is_email() {
            let per_row = columns.unwrap_or(3).min(items.len()).max(1);
            let width = format!("{}%", 100 / per_row);
            let mut table = presentation_table().with_style("margin-top: 24px");
            let mut items = items.into_iter().peekable();
            while items.peek().is_some() {
                let mut row = Element::new("tr");
                for item in items.by_ref().take(per_row) {
                    row.push_elem(
                        Element::new("td")
                            .attr("width", width.as_str())
                            .attr("valign", "top")
                            .with_style("padding: 8px")
                            .child(item),
                    );
                }
                table.push_elem(row);
            }
            table
        } else {
            let template = match columns {
                Some(n) => format!("repeat({}, 1fr)", n.max(1)),
                None => "repeat(auto-fit, minmax(220px, 1fr))".to_string(),
            };
            Element::new("div")
                .with_style(format!(
                    "display: grid; grid-template-columns: {template}; gap: 24px; margin-top: 32px"
                ))
                .children(items)
        }
    }

    /// Anchor styled as a button
    pub fn button(&self, text: &str, href: &str, field: impl Into<String>, look: &ButtonLook<'_>) -> Element {
        self.field(Element::new("a"), field)
            .attr("href", url::safe_href(href))
            .with_style(look.css())
            .text(text)
    }
}

/// Table with the attributes email clients need to not add spacing
pub(crate) fn presentation_table() -> Element {
    Element::new("table")
        .attr("role", "presentation")
        .attr("width", "100%")
        .attr("cellpadding", "0")
        .attr("cellspacing", "0")
        .attr("border", "0")
}

/// Join inline style fragments, skipping empty ones
pub(crate) fn join_styles<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Buttons
// =============================================================================

/// Colors of a button, read from the block style
pub(crate) struct ButtonLook<'a> {
    pub background: Cow<'a, str>,
    pub color: Cow<'a, str>,
    pub radius: Cow<'a, str>,
    pub outline: bool,
}

impl<'a> ButtonLook<'a> {
    /// Style keys consumed by buttons rather than the block container
    pub const KEYS: &'static [&'static str] = &["buttonColor", "buttonTextColor", "borderRadius"];

    pub fn from_style(style: &'a Style, background: &'a str, color: &'a str) -> Self {
        Self {
            background: style.or("buttonColor", background),
            color: style.or("buttonTextColor", color),
            radius: style.or("borderRadius", "6px"),
            outline: false,
        }
    }

    /// Secondary variant: transparent with a border in the text color
    pub fn outlined(&self, color: &'a str) -> Self {
        Self {
            background: Cow::Borrowed("transparent"),
            color: Cow::Borrowed(color),
            radius: self.radius.clone(),
            outline: true,
        }
    }

    pub fn css(&self) -> String {
        let border = if self.outline {
            format!("border: 2px solid {}", self.color)
        } else {
            format!("border: 2px solid {}", self.background)
        };
        format!(
            "display: inline-block; padding: 12px 28px; background-color: {}; color: {}; \
             {border}; border-radius: {}; text-decoration: none; font-weight: 600",
            self.background, self.color, self.radius
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
