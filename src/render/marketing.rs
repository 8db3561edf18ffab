//! Composite marketing sections.
//!
//! Each section is a headline block followed by a repeated sub-item render
//! (cards in a grid, rows, or disclosure items) and optional buttons.

use crate::block::{
    CtaContent, FaqContent, FeaturesContent, HeroContent, PricingContent, SocialContent,
    TeamContent, TestimonialsContent,
};
use crate::node::Element;

use super::url::{css_url, safe_href, safe_src};
use super::{ButtonLook, Ctx, join_styles};

const CARD_STYLE: &str =
    "padding: 24px; border: 1px solid #e5e7eb; border-radius: 12px; background-color: #ffffff";
const HEADLINE_STYLE: &str = "margin: 0 0 12px; font-size: 32px; line-height: 1.2";
const SUBHEADLINE_STYLE: &str = "margin: 0; font-size: 18px; opacity: 0.8";
const SECTION_DEFAULTS: &[(&str, &str)] = &[("padding", "60px 20px"), ("textAlign", "center")];

/// Headline + subheadline shared by most sections
fn header(cx: &Ctx<'_>, headline: &str, subheadline: Option<(&str, &str)>) -> Vec<Element> {
    let mut out: Vec<Element> = cx.text_field("h2", headline, "headline", HEADLINE_STYLE).into_iter().collect();
    if let Some((text, field)) = subheadline {
        out.extend(cx.text_field("p", text, field, SUBHEADLINE_STYLE));
    }
    out
}

/// Repeated sub-item holding the present parts in order
fn card(style: &str, parts: impl IntoIterator<Item = Option<Element>>) -> Element {
    Element::new("div").with_style(style).children(parts.into_iter().flatten())
}

/// Round photo of a person; `None` without a source
fn portrait(src: &str, alt: &str, size: &str, style: &str) -> Option<Element> {
    if src.trim().is_empty() {
        return None;
    }
    Some(
        Element::new("img")
            .attr("src", safe_src(src))
            .attr("alt", alt)
            .attr("width", size)
            .attr("height", size)
            .with_style(join_styles(["border-radius: 50%", style])),
    )
}

pub(super) fn hero(cx: &Ctx<'_>, content: &HeroContent) -> Element {
    let style = cx.style();
    let background = if content.background_image.trim().is_empty() {
        String::new()
    } else {
        format!(
            "background-image: {}; background-size: cover; background-position: center",
            css_url(&content.background_image)
        )
    };
    let own = style.resolve_with(&[("padding", "80px 20px"), ("textAlign", "center")], ButtonLook::KEYS);
    let section_style = join_styles([own.as_str(), background.as_str()]);

    let mut children: Vec<Element> = Vec::new();
    children.extend(cx.text_field(
        "h1",
        &content.headline,
        "headline",
        "margin: 0 0 16px; font-size: 40px; line-height: 1.2",
    ));
    children.extend(cx.text_field(
        "p",
        &content.subheadline,
        "subheadline",
        "margin: 0 0 24px; font-size: 18px; opacity: 0.9",
    ));
    if !content.button_text.is_empty() || cx.is_canvas() {
        let look = ButtonLook::from_style(style, "#ffffff", "#4f46e5");
        children.push(cx.button(&content.button_text, &content.button_link, "buttonText", &look));
    }

    cx.section(section_style, children)
}

pub(super) fn features(cx: &Ctx<'_>, content: &FeaturesContent) -> Element {
    let cards = content.features.iter().enumerate().map(|(i, feature)| {
        card(
            CARD_STYLE,
            [
                cx.text_field("div", &feature.icon, format!("features.{i}.icon"), "font-size: 32px; margin-bottom: 12px"),
                Some(cx.text_elem("h3", &feature.title, format!("features.{i}.title"), "margin: 0 0 8px; font-size: 20px")),
                cx.text_field("p", &feature.description, format!("features.{i}.description"), "margin: 0; opacity: 0.8"),
            ],
        )
    });

    let mut children = header(cx, &content.headline, Some((content.subheadline.as_str(), "subheadline")));
    children.push(cx.grid(cards.collect(), None));
    cx.section(cx.style().resolve_with(SECTION_DEFAULTS, &[]), children)
}

pub(super) fn testimonials(cx: &Ctx<'_>, content: &TestimonialsContent) -> Element {
    let cards = content.testimonials.iter().enumerate().map(|(i, testimonial)| {
        let quote = format!("\u{201c}{}\u{201d}", testimonial.quote);
        card(
            CARD_STYLE,
            [
                Some(cx.text_elem(
                    "p",
                    &quote,
                    format!("testimonials.{i}.quote"),
                    "margin: 0 0 16px; font-style: italic; font-size: 17px",
                )),
                portrait(&testimonial.avatar, &testimonial.author, "48", "margin-bottom: 8px"),
                Some(cx.text_elem("p", &testimonial.author, format!("testimonials.{i}.author"), "margin: 0; font-weight: 600")),
                cx.text_field("p", &testimonial.role, format!("testimonials.{i}.role"), "margin: 0; font-size: 14px; opacity: 0.7"),
            ],
        )
    });

    let mut children = header(cx, &content.headline, None);
    children.push(cx.grid(cards.collect(), Some(content.testimonials.len().clamp(1, 2))));
    cx.section(cx.style().resolve_with(SECTION_DEFAULTS, &[]), children)
}

pub(super) fn pricing(cx: &Ctx<'_>, content: &PricingContent) -> Element {
    let style = cx.style();
    let accent = style.or("accentColor", "#4f46e5");
    let look = ButtonLook::from_style(style, &accent, "#ffffff");

    let cards = content
        .plans
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            let border = if plan.highlighted {
                format!("border: 2px solid {accent}")
            } else {
                String::new()
            };
            let badge = plan.highlighted.then(|| {
                Element::new("div")
                    .with_style(format!(
                        "display: inline-block; margin-bottom: 12px; padding: 4px 12px; \
                         border-radius: 999px; background-color: {accent}; color: #ffffff; \
                         font-size: 12px; font-weight: 600"
                    ))
                    .text("Most Popular")
            });

            let price = Element::new("p")
                .with_style("margin: 0 0 16px")
                .child(cx.text_elem(
                    "span",
                    &plan.price,
                    format!("plans.{i}.price"),
                    "font-size: 36px; font-weight: 700",
                ))
                .children(cx.text_field("span", &plan.period, format!("plans.{i}.period"), "opacity: 0.7"));

            let features = plan.features.iter().enumerate().map(|(n, feature)| {
                cx.text_elem("li", feature, format!("plans.{i}.features.{n}"), "padding: 4px 0")
            });
            let features = Element::new("ul")
                .with_style("list-style: none; margin: 0 0 24px; padding: 0")
                .children(features);

            let button = (!plan.button_text.is_empty() || cx.is_canvas()).then(|| {
                cx.button(&plan.button_text, &plan.button_link, format!("plans.{i}.buttonText"), &look)
            });

            card(
                &join_styles([CARD_STYLE, border.as_str()]),
                [
                    badge,
                    Some(cx.text_elem("h3", &plan.name, format!("plans.{i}.name"), "margin: 0 0 8px; font-size: 20px")),
                    Some(price),
                    Some(features),
                    button,
                ],
            )
        })
        .collect();

    let mut children = header(cx, &content.headline, Some((content.subheadline.as_str(), "subheadline")));
    children.push(cx.grid(cards, None));

    let mut skip = ButtonLook::KEYS.to_vec();
    skip.push("accentColor");
    cx.section(style.resolve_with(SECTION_DEFAULTS, &skip), children)
}

pub(super) fn cta(cx: &Ctx<'_>, content: &CtaContent) -> Element {
    let style = cx.style();
    let look = ButtonLook::from_style(style, "#4f46e5", "#ffffff");
    let text_color = style.or("color", "#ffffff");

    let mut children = header(cx, &content.headline, Some((content.description.as_str(), "description")));

    let mut buttons = Element::new("div").with_style("margin-top: 24px");
    if !content.button_text.is_empty() || cx.is_canvas() {
        buttons.push_elem(cx.button(&content.button_text, &content.button_link, "buttonText", &look));
    }
    if !content.secondary_button_text.is_empty() {
        let secondary = look.outlined(&text_color);
        buttons.push_text(" ");
        buttons.push_elem(cx.button(
            &content.secondary_button_text,
            &content.secondary_button_link,
            "secondaryButtonText",
            &secondary,
        ));
    }
    if !buttons.is_empty() {
        children.push(buttons);
    }

    cx.section(style.resolve_with(SECTION_DEFAULTS, ButtonLook::KEYS), children)
}

/// Disclosure widgets on the web; email clients get question/answer pairs
pub(super) fn faq(cx: &Ctx<'_>, content: &FaqContent) -> Element {
    let items = content.items.iter().enumerate().map(|(i, item)| {
        let question = format!("items.{i}.question");
        let answer = cx.text_elem("p", &item.answer, format!("items.{i}.answer"), "margin: 8px 0 0; opacity: 0.8");

        if cx.is_email() {
            Element::new("div")
                .with_style("padding: 16px 0; border-bottom: 1px solid #e5e7eb")
                .child(cx.text_elem("h4", &item.question, question, "margin: 0; font-size: 17px"))
                .child(answer)
        } else {
            Element::new("details")
                .with_style("padding: 16px 0; border-bottom: 1px solid #e5e7eb")
                .child(cx.text_elem(
                    "summary",
                    &item.question,
                    question,
                    "cursor: pointer; font-weight: 600; font-size: 17px",
                ))
                .child(answer)
        }
    });

    let list = Element::new("div")
        .with_style("max-width: 720px; margin: 24px auto 0; text-align: left")
        .children(items);

    let mut children = header(cx, &content.headline, None);
    children.push(list);
    cx.section(cx.style().resolve_with(SECTION_DEFAULTS, &[]), children)
}

pub(super) fn team(cx: &Ctx<'_>, content: &TeamContent) -> Element {
    let cards = content.members.iter().enumerate().map(|(i, member)| {
        card(
            "padding: 16px; text-align: center",
            [
                portrait(&member.photo, &member.name, "96", "object-fit: cover; margin-bottom: 12px"),
                Some(cx.text_elem("h3", &member.name, format!("members.{i}.name"), "margin: 0; font-size: 18px")),
                cx.text_field("p", &member.role, format!("members.{i}.role"), "margin: 4px 0 0; opacity: 0.7"),
                cx.text_field("p", &member.bio, format!("members.{i}.bio"), "margin: 8px 0 0; font-size: 14px"),
            ],
        )
    });

    let mut children = header(cx, &content.headline, None);
    children.push(cx.grid(cards.collect(), None));
    cx.section(cx.style().resolve_with(SECTION_DEFAULTS, &[]), children)
}

pub(super) fn social(cx: &Ctx<'_>, content: &SocialContent) -> Element {
    let links = content.links.iter().enumerate().map(|(i, link)| {
        cx.field(Element::new("a"), format!("links.{i}.platform"))
            .attr("href", safe_href(&link.url))
            .with_style(
                "display: inline-block; margin: 0 6px; padding: 8px 14px; border-radius: 999px; \
                 background-color: #f3f4f6; color: #111827; text-decoration: none; font-size: 14px",
            )
            .text(platform_label(&link.platform))
    });

    Element::new("div")
        .with_style(cx.style().resolve_with(&[("textAlign", "center")], &[]))
        .children(links)
}

/// Display name of a social platform key (`linkedin` → `LinkedIn`)
fn platform_label(platform: &str) -> String {
    match platform.to_ascii_lowercase().as_str() {
        "twitter" | "x" => "X (Twitter)".to_string(),
        "linkedin" => "LinkedIn".to_string(),
        "youtube" => "YouTube".to_string(),
        "tiktok" => "TikTok".to_string(),
        _ => {
            let mut chars = platform.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::platform_label;
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
    fn test_hero_headline_and_background() {
        let html = render(
            Flavor::Website,
            BlockType::Hero,
            json!({ "headline": "Sale", "backgroundImage": "https://cdn.test/bg.jpg" }),
        );
        assert!(html.contains(">Sale</h1>"));
        assert!(html.contains("background-image: url(&#39;https://cdn.test/bg.jpg&#39;)"));
        assert!(!html.contains("Build Something Amazing"));
    }

    #[test]
    fn test_hero_without_button_text_has_no_button() {
        let html = render(Flavor::Website, BlockType::Hero, json!({ "buttonText": "" }));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_features_cards() {
        let html = render(
            Flavor::Website,
            BlockType::Features,
            json!({ "features": [{ "title": "One" }, { "title": "Two" }] }),
        );
        assert_eq!(html.matches("<h3").count(), 2);
        assert!(html.contains(">One</h3>"));
    }

    #[test]
    fn test_pricing_highlight_badge() {
        let html = render(
            Flavor::Website,
            BlockType::Pricing,
            json!({ "plans": [
                { "name": "Basic", "price": "$5", "features": ["a"] },
                { "name": "Team", "price": "$50", "highlighted": true }
            ] }),
        );
        assert_eq!(html.matches("Most Popular").count(), 1);
        assert!(html.contains("background-color: #ffffff; border: 2px solid #4f46e5"));
        assert!(!html.contains("accent-color"));
    }

    #[test]
    fn test_cta_secondary_button() {
        let html = render(Flavor::Website, BlockType::Cta, json!({}));
        assert_eq!(html.matches("<a ").count(), 1);

        let html = render(
            Flavor::Website,
            BlockType::Cta,
            json!({ "secondaryButtonText": "Learn more", "secondaryButtonLink": "/about" }),
        );
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains("background-color: transparent"));
    }

    #[test]
    fn test_faq_by_flavor() {
        let web = render(Flavor::Website, BlockType::Faq, json!({}));
        assert_eq!(web.matches("<details").count(), 2);

        let email = render(Flavor::Email, BlockType::Faq, json!({}));
        assert!(!email.contains("<details"));
        assert_eq!(email.matches("<h4").count(), 2);
    }

    #[test]
    fn test_social_links() {
        let html = render(
            Flavor::Email,
            BlockType::Social,
            json!({ "links": [{ "platform": "linkedin", "url": "https://linkedin.com/x" }] }),
        );
        assert!(html.contains(r#"href="https://linkedin.com/x""#));
        assert!(html.contains(">LinkedIn</a>"));
    }

    #[test]
    fn test_platform_label() {
        assert_eq!(platform_label("facebook"), "Facebook");
        assert_eq!(platform_label("twitter"), "X (Twitter)");
        assert_eq!(platform_label(""), "");
    }

    #[test]
    fn test_team_cards_with_and_without_photo() {
        let html = render(
            Flavor::Website,
            BlockType::Team,
            json!({ "members": [
                { "name": "Ada", "role": "CTO", "photo": "https://cdn.test/ada.jpg" },
                { "name": "Lin", "role": "", "photo": "" }
            ] }),
        );
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"alt="Ada" width="96" height="96""#));
        assert!(html.contains("border-radius: 50%; object-fit: cover"));
        assert!(html.contains(">Lin</h3>"));
        assert_eq!(html.matches(">CTO</p>").count(), 1);
    }

    #[test]
    fn test_testimonial_quote_marks() {
        let html = render(
            Flavor::Website,
            BlockType::Testimonials,
            json!({ "testimonials": [{ "quote": "Great", "author": "Sam" }] }),
        );
        assert!(html.contains("\u{201c}Great\u{201d}</p>"));
        assert!(html.contains("repeat(1, 1fr)"));
    }
}
