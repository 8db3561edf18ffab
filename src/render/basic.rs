//! Templates of the simple block types.

use crate::block::{ButtonContent, ColumnsContent, HeadingContent, ImageContent, ListContent, TextContent};
use crate::node::Element;

use super::url::{safe_href, safe_src};
use super::{ButtonLook, Ctx, join_styles, presentation_table};

pub(super) fn heading(cx: &Ctx<'_>, content: &HeadingContent) -> Element {
    let style = cx.style().resolve_with(&[("margin", "0")], &[]);
    cx.text_elem(content.tag(), &content.text, "text", &style)
}

/// Paragraphs split on blank lines; single newlines become `<br>`
pub(super) fn text(cx: &Ctx<'_>, content: &TextContent) -> Element {
    let mut root = cx.field(Element::new("div"), "text").with_style(cx.style().resolve());

    let paragraphs = paragraphs(&content.text);
    let last = paragraphs.len().saturating_sub(1);
    for (i, paragraph) in paragraphs.iter().enumerate() {
        let margin = if i == last { "margin: 0" } else { "margin: 0 0 1em" };
        let mut p = Element::new("p").with_style(margin);
        for (n, line) in paragraph.lines().enumerate() {
            if n > 0 {
                p.push_elem(Element::new("br"));
            }
            p.push_text(line);
        }
        root.push_elem(p);
    }
    root
}

fn paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(|p| p.trim_matches('\n'))
        .filter(|p| !p.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub(super) fn button(cx: &Ctx<'_>, content: &ButtonContent) -> Element {
    let style = cx.style();
    let look = ButtonLook::from_style(style, "#4f46e5", "#ffffff");
    let mut anchor = cx.button(&content.text, &content.link, "text", &look);
    if content.open_in_new_tab {
        anchor = anchor.attr("target", "_blank").attr("rel", "noopener noreferrer");
    }

    Element::new("div")
        .with_style(style.resolve_with(&[("textAlign", "center")], ButtonLook::KEYS))
        .child(anchor)
}

/// Image, linked when `content.link` is set, with an optional caption
pub(super) fn image(cx: &Ctx<'_>, content: &ImageContent) -> Element {
    let style = cx.style();
    let width = style.get_str("width").map(|w| format!("width: {w}"));
    let radius = style.get_str("borderRadius").map(|r| format!("border-radius: {r}"));
    let img_style = join_styles([
        "max-width: 100%; height: auto; border: 0",
        width.as_deref().unwrap_or(""),
        radius.as_deref().unwrap_or(""),
    ]);

    let img = Element::new("img")
        .attr("src", safe_src(&content.src))
        .attr("alt", &content.alt)
        .with_style(img_style);
    let img = if content.link.trim().is_empty() {
        img
    } else {
        Element::new("a").attr("href", safe_href(&content.link)).child(img)
    };

    let mut root = Element::new("div")
        .with_style(style.resolve_with(&[("textAlign", "center")], &["width", "borderRadius"]))
        .child(img);
    if let Some(caption) = cx.text_field(
        "p",
        &content.caption,
        "caption",
        "margin: 8px 0 0; font-size: 14px; color: #6b7280",
    ) {
        root.push_elem(caption);
    }
    root
}

const DIVIDER_KEYS: &[&str] = &["borderWidth", "borderStyle", "borderColor", "marginTop", "marginBottom"];

pub(super) fn divider(cx: &Ctx<'_>) -> Element {
    let style = cx.style();
    let rule = format!(
        "border: none; border-top: {} {} {}; margin: {} 0 {} 0",
        style.or("borderWidth", "1px"),
        style.or("borderStyle", "solid"),
        style.or("borderColor", "#e5e7eb"),
        style.or("marginTop", "20px"),
        style.or("marginBottom", "20px"),
    );
    let rest = style.resolve_with(&[], DIVIDER_KEYS);
    Element::new("hr").with_style(join_styles([rule.as_str(), rest.as_str()]))
}

pub(super) fn spacer(cx: &Ctx<'_>) -> Element {
    let style = cx.style();
    let height = style.or("height", "40px");
    let box_style = format!("height: {height}; line-height: {height}; font-size: 1px");
    let rest = style.resolve_with(&[], &["height"]);
    Element::new("div")
        .with_style(join_styles([box_style.as_str(), rest.as_str()]))
        .raw("&nbsp;")
}

/// One table row, one cell per column, in every flavor
pub(super) fn columns(cx: &Ctx<'_>, content: &ColumnsContent) -> Element {
    let style = cx.style();
    let gap = style.or("gap", "20px");
    let count = content.columns.len().max(1);
    let width = format!("{}%", 100 / count);

    let mut row = Element::new("tr");
    for (i, column) in content.columns.iter().enumerate() {
        let cell_style = if i + 1 < count {
            format!("vertical-align: top; padding-right: {gap}")
        } else {
            "vertical-align: top".to_string()
        };
        let cell = Element::new("td")
            .attr("width", width.as_str())
            .attr("valign", "top")
            .with_style(cell_style);
        row.push_elem(cx.field(cell, format!("columns.{i}.content")).text(&column.content));
    }

    presentation_table()
        .with_style(style.resolve_with(&[], &["gap"]))
        .child(row)
}

pub(super) fn list(cx: &Ctx<'_>, content: &ListContent) -> Element {
    let tag = if content.is_ordered() { "ol" } else { "ul" };
    let items = content
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| cx.field(Element::new("li"), format!("items.{i}")).text(item));

    Element::new(tag)
        .with_style(cx.style().resolve_with(&[("margin", "0"), ("paddingLeft", "24px")], &[]))
        .children(items)
}

#[cfg(test)]
mod tests {
    use crate::block::{Block, BlockFactory, BlockType};
    use crate::config::{Flavor, RenderConfig};
    use crate::id::SequentialIds;
    use crate::render::BlockRenderer;
    use serde_json::json;

    fn render(block_type: BlockType, content: serde_json::Value, style: serde_json::Value) -> String {
        let mut block: Block = BlockFactory::new(SequentialIds::new()).create(block_type);
        block.patch_content(content.as_object().unwrap()).unwrap();
        block.patch_style(style.as_object().unwrap());
        BlockRenderer::new(Flavor::Website, RenderConfig::EXPORT).render_html(&block)
    }

    #[test]
    fn test_heading_level() {
        let html = render(BlockType::Heading, json!({ "text": "Hi", "level": 1 }), json!({}));
        assert!(html.starts_with("<h1"));
        assert!(html.ends_with(">Hi</h1>"));

        let html = render(BlockType::Heading, json!({ "level": 7 }), json!({}));
        assert!(html.starts_with("<h2"));
    }

    #[test]
    fn test_text_paragraphs() {
        let html = render(
            BlockType::Text,
            json!({ "text": "One\nline two\n\nPara two" }),
            json!({}),
        );
        assert!(html.contains(r#"<p style="margin: 0 0 1em">One<br />line two</p>"#));
        assert!(html.contains(r#"<p style="margin: 0">Para two</p>"#));
    }

    #[test]
    fn test_button_alignment_default_and_override() {
        let html = render(BlockType::Button, json!({ "text": "Buy" }), json!({ "textAlign": null }));
        assert!(html.starts_with(r#"<div style="padding: 20px; text-align: center">"#), "{html}");
        assert!(html.contains("background-color: #4f46e5"));

        let html = render(BlockType::Button, json!({}), json!({ "textAlign": "left" }));
        assert!(html.contains("text-align: left"));
        assert!(!html.contains("button-color"));
    }

    #[test]
    fn test_button_new_tab() {
        let html = render(BlockType::Button, json!({ "openInNewTab": true }), json!({}));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_button_split_script_link() {
        let html = render(
            BlockType::Button,
            json!({ "link": "java\tscript:alert(document.cookie)" }),
            json!({}),
        );
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains("script:"));
    }

    #[test]
    fn test_image_link_wrapping() {
        let html = render(BlockType::Image, json!({ "link": "" }), json!({}));
        assert!(!html.contains("<a "));

        let html = render(BlockType::Image, json!({ "link": "https://shop.test" }), json!({}));
        assert!(html.contains(r#"<a href="https://shop.test"><img "#));
    }

    #[test]
    fn test_image_rejects_script_src() {
        let html = render(BlockType::Image, json!({ "src": "javascript:alert(1)" }), json!({}));
        assert!(html.contains(r##"src="#""##));
    }

    #[test]
    fn test_divider_styles() {
        let html = render(BlockType::Divider, json!({}), json!({}));
        assert_eq!(
            html,
            r#"<hr style="border: none; border-top: 1px solid #e5e7eb; margin: 20px 0 20px 0" />"#
        );

        let html = render(
            BlockType::Divider,
            json!({}),
            json!({ "borderColor": "#f00", "borderWidth": 3, "opacity": 0.5 }),
        );
        assert!(html.contains("border-top: 3 solid #f00"));
        assert!(html.contains("; opacity: 0.5"));
    }

    #[test]
    fn test_spacer_height() {
        let html = render(BlockType::Spacer, json!({}), json!({ "height": "" }));
        assert!(html.contains("height: 40px"));
        assert!(html.contains("&nbsp;"));
    }

    #[test]
    fn test_columns_table() {
        let html = render(
            BlockType::Columns,
            json!({ "columns": [{ "content": "A" }, { "content": "B" }, { "content": "C" }] }),
            json!({}),
        );
        assert!(html.starts_with("<table"));
        assert_eq!(html.matches("<td").count(), 3);
        assert!(html.contains(r#"width="33%""#));
    }

    #[test]
    fn test_list_kinds() {
        let html = render(BlockType::List, json!({ "items": ["a", "b"] }), json!({}));
        assert!(html.starts_with("<ul"));
        assert_eq!(html.matches("<li>").count(), 2);

        let html = render(BlockType::List, json!({ "listType": "ordered" }), json!({}));
        assert!(html.starts_with("<ol"));
    }
}
