//! Media blocks: gallery, video and map.
//!
//! Email clients run neither iframes nor `<video>`, so video becomes a linked
//! thumbnail and map a linked address there.

use crate::block::{GalleryContent, MapContent, VideoContent};
use crate::node::Element;

use super::url::{VideoSource, map_embed_url, map_link_url, safe_href, safe_src};
use super::{Ctx, join_styles};

pub(super) fn gallery(cx: &Ctx<'_>, content: &GalleryContent) -> Element {
    let columns = match content.columns {
        0 => 3,
        n => usize::from(n),
    };
    let items = content
        .images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let mut figure = Element::new("div").child(
                Element::new("img")
                    .attr("src", safe_src(&image.src))
                    .attr("alt", &image.alt)
                    .with_style("display: block; width: 100%; height: auto; border: 0; border-radius: 8px"),
            );
            if let Some(caption) = cx.text_field(
                "p",
                &image.caption,
                format!("images.{i}.caption"),
                "margin: 6px 0 0; font-size: 14px; color: #6b7280",
            ) {
                figure.push_elem(caption);
            }
            figure
        })
        .collect();

    let mut grid = cx.grid(items, Some(columns));
    grid.remove_attr("style");
    let grid = if cx.is_email() {
        grid
    } else {
        grid.with_style(format!(
            "display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 16px"
        ))
    };

    Element::new("div")
        .with_style(cx.style().resolve())
        .child(grid)
}

pub(super) fn video(cx: &Ctx<'_>, content: &VideoContent) -> Element {
    let style = cx.style();
    let mut root = Element::new("div").with_style(style.resolve_with(&[("textAlign", "center")], &[]));

    let url = content.url.trim();
    if url.is_empty() {
        root.push_elem(
            Element::new("p")
                .with_style("margin: 0; padding: 40px; background-color: #f3f4f6; color: #6b7280")
                .text("No video selected"),
        );
        return root;
    }

    let source = VideoSource::parse(url);
    if cx.is_email() {
        root.push_elem(email_video(content, &source));
    } else {
        root.push_elem(web_video(content, &source));
    }
    if let Some(title) = cx.text_field(
        "p",
        &content.title,
        "title",
        "margin: 8px 0 0; font-size: 14px; color: #6b7280",
    ) {
        root.push_elem(title);
    }
    root
}

/// Thumbnail linked to the video page; a text link when no thumbnail exists
fn email_video(content: &VideoContent, source: &VideoSource<'_>) -> Element {
    let href = safe_href(&content.url);
    let thumbnail = if content.thumbnail.trim().is_empty() {
        source.thumbnail_url()
    } else {
        Some(content.thumbnail.clone())
    };

    match thumbnail {
        Some(src) => Element::new("a").attr("href", href).child(
            Element::new("img")
                .attr("src", safe_src(&src))
                .attr("alt", if content.title.is_empty() { "Watch video" } else { content.title.as_str() })
                .with_style("display: block; max-width: 100%; height: auto; border: 0; margin: 0 auto"),
        ),
        None => Element::new("a")
            .attr("href", href)
            .with_style("color: #4f46e5; font-weight: 600")
            .text("\u{25b6} Watch video"),
    }
}

/// Responsive 16:9 iframe for hosted players, `<video>` for files
fn web_video(content: &VideoContent, source: &VideoSource<'_>) -> Element {
    match source.embed_url() {
        Some(embed) => Element::new("div")
            .with_style("position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden")
            .child(
                Element::new("iframe")
                    .attr("src", embed)
                    .attr_opt("title", (!content.title.is_empty()).then_some(content.title.as_str()))
                    .attr("allow", "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture")
                    .attr("allowfullscreen", "")
                    .attr("frameborder", "0")
                    .with_style("position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: 0"),
            ),
        None => Element::new("video")
            .attr("src", safe_src(&content.url))
            .attr("controls", "")
            .attr_opt(
                "poster",
                (!content.thumbnail.trim().is_empty()).then(|| safe_src(&content.thumbnail)),
            )
            .with_style("max-width: 100%"),
    }
}

pub(super) fn map(cx: &Ctx<'_>, content: &MapContent) -> Element {
    let style = cx.style();
    let height = style.or("height", "300px");
    let root_style = style.resolve_with(&[], &["height"]);
    let zoom = match content.zoom {
        0 => 14,
        z => z.min(21),
    };

    let inner = if content.address.trim().is_empty() {
        Element::new("p")
            .with_style("margin: 0; padding: 40px; background-color: #f3f4f6; color: #6b7280; text-align: center")
            .text("No address set")
    } else if cx.is_email() {
        cx.field(Element::new("a"), "address")
            .attr("href", map_link_url(&content.address))
            .with_style("color: #4f46e5; text-decoration: none; font-weight: 600")
            .text(format!("\u{1f4cd} {}", content.address))
    } else {
        Element::new("iframe")
            .attr("src", map_embed_url(&content.address, zoom))
            .attr("title", &content.address)
            .attr("loading", "lazy")
            .attr("frameborder", "0")
            .with_style(join_styles([
                "display: block; width: 100%; border: 0",
                format!("height: {height}").as_str(),
            ]))
    };

    Element::new("div").with_style(root_style).child(inner)
}

#[cfg(test)]
mod tests {
    use crate::block::{Block, BlockFactory, BlockType};
    use crate::config::{Flavor, RenderConfig};
    use crate::id::SequentialIds;
    use crate::render::BlockRenderer;
    use serde_json::{Value, json};

    fn render(flavor: Flavor, block_type: BlockType, content: Value) -> String {
        let mut block: Block = BlockFactory::new(SequentialIds::new()).create(block_type);
        block.patch_content(content.as_object().unwrap()).unwrap();
        BlockRenderer::new(flavor, RenderConfig::EXPORT).render_html(&block)
    }

    #[test]
    fn test_youtube_embed_on_web() {
        let html = render(
            Flavor::Website,
            BlockType::Video,
            json!({ "url": "https://youtu.be/abc123" }),
        );
        assert!(html.contains(r#"<iframe src="https://www.youtube.com/embed/abc123""#));
    }

    #[test]
    fn test_file_video_on_funnel() {
        let html = render(
            Flavor::Funnel,
            BlockType::Video,
            json!({ "url": "https://cdn.test/a.mp4", "thumbnail": "" }),
        );
        assert!(html.contains(r#"<video src="https://cdn.test/a.mp4" controls="""#));
        assert!(!html.contains("poster"));
    }

    #[test]
    fn test_email_video_is_linked_thumbnail() {
        let html = render(
            Flavor::Email,
            BlockType::Video,
            json!({ "url": "https://youtu.be/abc123", "thumbnail": "" }),
        );
        assert!(!html.contains("<iframe"));
        assert!(html.contains(r#"<a href="https://youtu.be/abc123"><img src="https://img.youtube.com/vi/abc123/hqdefault.jpg""#));

        let html = render(
            Flavor::Email,
            BlockType::Video,
            json!({ "url": "https://cdn.test/a.mp4", "thumbnail": "" }),
        );
        assert!(html.contains("Watch video</a>"));
    }

    #[test]
    fn test_empty_video_placeholder() {
        let html = render(Flavor::Website, BlockType::Video, json!({ "url": "" }));
        assert!(html.contains("No video selected"));
    }

    #[test]
    fn test_map_by_flavor() {
        let web = render(Flavor::Website, BlockType::Map, json!({ "address": "Main St 1", "zoom": 0 }));
        assert!(web.contains("https://maps.google.com/maps?q=Main%20St%201&amp;z=14&amp;output=embed"));
        assert!(web.contains("height: 300px"));

        let email = render(Flavor::Email, BlockType::Map, json!({ "address": "Main St 1" }));
        assert!(!email.contains("<iframe"));
        assert!(email.contains(r#"href="https://maps.google.com/?q=Main%20St%201""#));
    }

    #[test]
    fn test_gallery_columns() {
        let html = render(
            Flavor::Website,
            BlockType::ImageGallery,
            json!({ "columns": 2, "images": [{ "src": "a.png" }, { "src": "b.png" }, { "src": "c.png" }] }),
        );
        assert!(html.contains("grid-template-columns: repeat(2, 1fr)"));
        assert_eq!(html.matches("<img").count(), 3);

        let html = render(
            Flavor::Email,
            BlockType::ImageGallery,
            json!({ "columns": 2, "images": [{ "src": "a.png" }, { "src": "b.png" }, { "src": "c.png" }] }),
        );
        assert_eq!(html.matches("<tr>").count(), 2);
    }
}
