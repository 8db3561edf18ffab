//! Full-document serialization
//!
//! Renders every block in HTML mode and wraps the result in a complete,
//! self-contained document suitable for an iframe `srcdoc` or export.
//!
//! - Email: outer full-width presentation table, inner centered table of
//!   the configured content width, one content cell.
//! - Website / funnel: a `<div>` flow container.

use crate::block::Block;
use crate::config::SerializeConfig;
use crate::html;
use crate::node::Element;
use crate::render::{BlockRenderer, RenderMode, presentation_table};

const DOCTYPE: &str = "<!DOCTYPE html>";
const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif";

/// Serializes block lists into HTML documents
#[derive(Debug, Clone, Default)]
pub struct DocumentSerializer {
    config: SerializeConfig,
    renderer: BlockRenderer,
}

impl DocumentSerializer {
    pub fn new(config: SerializeConfig) -> Self {
        let renderer = BlockRenderer::new(config.flavor, config.render.clone());
        Self { config, renderer }
    }

    pub fn config(&self) -> &SerializeConfig {
        &self.config
    }

    /// Complete HTML document for `blocks`
    pub fn serialize(&self, blocks: &[Block]) -> String {
        let mut output = String::from(DOCTYPE);
        html::render_element(&self.document(blocks), &mut output);
        tracing::debug!(
            flavor = self.config.flavor.as_str(),
            blocks = blocks.len(),
            bytes = output.len(),
            "serialized document"
        );
        output
    }

    /// Concatenated block fragments without the document shell
    pub fn serialize_fragment(&self, blocks: &[Block]) -> String {
        self.renderer.render_all_html(blocks)
    }

    /// Indented document for a "view HTML" pane
    pub fn view_source(&self, blocks: &[Block]) -> String {
        format!("{DOCTYPE}\n{}", html::render_pretty(&self.document(blocks)))
    }

    /// Document tree: `<html>` with head and body
    pub fn document(&self, blocks: &[Block]) -> Element {
        let content: Vec<Element> = if blocks.is_empty() {
            vec![self.placeholder()]
        } else {
            blocks
                .iter()
                .map(|block| self.renderer.tree(block, RenderMode::Html))
                .collect()
        };

        Element::new("html")
            .attr("lang", "en")
            .child(self.head())
            .child(self.body(content))
    }

    fn head(&self) -> Element {
        Element::new("head")
            .child(Element::new("meta").attr("charset", "UTF-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1.0"),
            )
            .child(Element::new("title").text(&self.config.title))
    }

    fn body(&self, content: Vec<Element>) -> Element {
        let body = Element::new("body").with_style(format!(
            "margin: 0; padding: 0; background-color: {}; font-family: {FONT_STACK}",
            self.config.background()
        ));

        if !self.config.flavor.is_email() {
            return body.child(Element::new("div").children(content));
        }

        let width = self.config.content_width;
        let inner = presentation_table()
            .attr("align", "center")
            .with_style(format!(
                "max-width: {width}px; margin: 0 auto; background-color: #ffffff"
            ))
            .child(Element::new("tr").child(Element::new("td").children(content)));
        let outer = presentation_table()
            .with_style(format!("background-color: {}", self.config.background()))
            .child(
                Element::new("tr").child(
                    Element::new("td")
                        .attr("align", "center")
                        .with_style("padding: 24px 0")
                        .child(inner),
                ),
            );
        body.child(outer)
    }

    fn placeholder(&self) -> Element {
        Element::new("p")
            .with_style("margin: 0; padding: 60px 20px; text-align: center; color: #9ca3af")
            .text(self.config.flavor.empty_placeholder())
    }
}
