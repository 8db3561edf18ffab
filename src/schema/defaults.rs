//! Default content and style templates.
//!
//! Every call builds a fresh value, so blocks never share their template.

use crate::block::*;
use crate::style::Style;

fn declarations(pairs: &[(&str, &str)]) -> Style {
    pairs.iter().map(|&(k, v)| (k, v)).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn form_content() -> FormContent {
    FormContent {
        headline: "Get in Touch".into(),
        description: "We'll get back to you within one business day.".into(),
        fields: vec![
            FormField {
                name: "name".into(),
                label: "Name".into(),
                field_type: "text".into(),
                placeholder: "Your name".into(),
                required: true,
            },
            FormField {
                name: "email".into(),
                label: "Email".into(),
                field_type: "email".into(),
                placeholder: "you@example.com".into(),
                required: true,
            },
            FormField {
                name: "message".into(),
                label: "Message".into(),
                field_type: "textarea".into(),
                placeholder: "How can we help?".into(),
                required: false,
            },
        ],
        submit_text: "Send Message".into(),
        action: String::new(),
        ..Default::default()
    }
}

fn text_content() -> TextContent {
    TextContent {
        text: "Start writing here. Click to edit this text.".into(),
        ..Default::default()
    }
}

pub(super) fn content(block_type: BlockType) -> BlockContent {
    match block_type {
        BlockType::Hero => BlockContent::Hero(HeroContent {
            headline: "Build Something Amazing".into(),
            subheadline: "Everything you need to launch, grow and delight your customers.".into(),
            button_text: "Get Started".into(),
            button_link: "#".into(),
            ..Default::default()
        }),
        BlockType::Heading => BlockContent::Heading(HeadingContent {
            text: "Your Heading Here".into(),
            level: 2,
            ..Default::default()
        }),
        BlockType::Text => BlockContent::Text(text_content()),
        BlockType::RichText => BlockContent::RichText(text_content()),
        BlockType::Image => BlockContent::Image(ImageContent {
            src: "https://placehold.co/600x300".into(),
            alt: "Image".into(),
            ..Default::default()
        }),
        BlockType::ImageGallery => BlockContent::ImageGallery(GalleryContent {
            images: (1..=3)
                .map(|n| GalleryImage {
                    src: format!("https://placehold.co/400x300?text={n}"),
                    alt: format!("Gallery image {n}"),
                    caption: String::new(),
                })
                .collect(),
            columns: 3,
            ..Default::default()
        }),
        BlockType::Video => BlockContent::Video(VideoContent {
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".into(),
            title: "Watch the video".into(),
            thumbnail: "https://placehold.co/600x340?text=Video".into(),
            ..Default::default()
        }),
        BlockType::Button => BlockContent::Button(ButtonContent {
            text: "Click Here".into(),
            link: "#".into(),
            open_in_new_tab: false,
            ..Default::default()
        }),
        BlockType::Features => BlockContent::Features(FeaturesContent {
            headline: "Why Choose Us".into(),
            subheadline: "Everything you need in one place".into(),
            features: vec![
                FeatureItem {
                    title: "Fast".into(),
                    description: "Pages load in the blink of an eye.".into(),
                    icon: "⚡".into(),
                },
                FeatureItem {
                    title: "Secure".into(),
                    description: "Your data is protected end to end.".into(),
                    icon: "🔒".into(),
                },
                FeatureItem {
                    title: "Simple".into(),
                    description: "No code required to get started.".into(),
                    icon: "✨".into(),
                },
            ],
            ..Default::default()
        }),
        BlockType::Testimonials => BlockContent::Testimonials(TestimonialsContent {
            headline: "What Our Customers Say".into(),
            testimonials: vec![
                Testimonial {
                    quote: "This product changed how our team works.".into(),
                    author: "Jane Cooper".into(),
                    role: "CEO, Acme".into(),
                    avatar: String::new(),
                },
                Testimonial {
                    quote: "Setup took minutes and support is fantastic.".into(),
                    author: "Alex Morgan".into(),
                    role: "Founder, Northwind".into(),
                    avatar: String::new(),
                },
            ],
            ..Default::default()
        }),
        BlockType::Pricing => BlockContent::Pricing(PricingContent {
            headline: "Simple Pricing".into(),
            subheadline: "Choose the plan that fits".into(),
            plans: vec![
                PricingPlan {
                    name: "Starter".into(),
                    price: "$9".into(),
                    period: "/month".into(),
                    features: strings(&["1 project", "Email support"]),
                    button_text: "Choose Starter".into(),
                    button_link: "#".into(),
                    highlighted: false,
                },
                PricingPlan {
                    name: "Pro".into(),
                    price: "$29".into(),
                    period: "/month".into(),
                    features: strings(&["Unlimited projects", "Priority support", "Analytics"]),
                    button_text: "Choose Pro".into(),
                    button_link: "#".into(),
                    highlighted: true,
                },
            ],
            ..Default::default()
        }),
        BlockType::Form => BlockContent::Form(form_content()),
        BlockType::ContactForm => BlockContent::ContactForm(form_content()),
        BlockType::Cta => BlockContent::Cta(CtaContent {
            headline: "Ready to Get Started?".into(),
            description: "Join thousands of happy customers today.".into(),
            button_text: "Start Free Trial".into(),
            button_link: "#".into(),
            ..Default::default()
        }),
        BlockType::Faq => BlockContent::Faq(FaqContent {
            headline: "Frequently Asked Questions".into(),
            items: vec![
                FaqItem {
                    question: "How do I get started?".into(),
                    answer: "Sign up and follow the setup guide.".into(),
                },
                FaqItem {
                    question: "Can I cancel anytime?".into(),
                    answer: "Yes, there are no long-term contracts.".into(),
                },
            ],
            ..Default::default()
        }),
        BlockType::Divider => BlockContent::Divider(EmptyContent::default()),
        BlockType::Spacer => BlockContent::Spacer(EmptyContent::default()),
        BlockType::Columns => BlockContent::Columns(ColumnsContent {
            columns: vec![
                Column {
                    content: "Left column content".into(),
                },
                Column {
                    content: "Right column content".into(),
                },
            ],
            ..Default::default()
        }),
        BlockType::List => BlockContent::List(ListContent {
            items: strings(&["First item", "Second item", "Third item"]),
            list_type: "bullet".into(),
            ..Default::default()
        }),
        BlockType::Team => BlockContent::Team(TeamContent {
            headline: "Meet the Team".into(),
            members: vec![
                TeamMember {
                    name: "Sam Lee".into(),
                    role: "Founder".into(),
                    photo: "https://placehold.co/200x200".into(),
                    bio: String::new(),
                },
                TeamMember {
                    name: "Riley Chen".into(),
                    role: "Designer".into(),
                    photo: "https://placehold.co/200x200".into(),
                    bio: String::new(),
                },
            ],
            ..Default::default()
        }),
        BlockType::Map => BlockContent::Map(MapContent {
            address: "1600 Amphitheatre Parkway, Mountain View, CA".into(),
            zoom: 14,
            ..Default::default()
        }),
        BlockType::Social => BlockContent::Social(SocialContent {
            links: ["facebook", "twitter", "instagram"]
                .iter()
                .map(|platform| SocialLink {
                    platform: platform.to_string(),
                    url: "#".into(),
                })
                .collect(),
            ..Default::default()
        }),
    }
}

pub(super) fn style(block_type: BlockType) -> Style {
    match block_type {
        BlockType::Hero => declarations(&[
            ("backgroundColor", "#4f46e5"),
            ("color", "#ffffff"),
            ("padding", "80px 20px"),
            ("textAlign", "center"),
        ]),
        BlockType::Heading => declarations(&[
            ("color", "#111827"),
            ("textAlign", "left"),
            ("padding", "10px 20px"),
        ]),
        BlockType::Text | BlockType::RichText => declarations(&[
            ("color", "#374151"),
            ("fontSize", "16px"),
            ("lineHeight", "1.6"),
            ("padding", "10px 20px"),
        ]),
        BlockType::Image => declarations(&[("padding", "10px 20px"), ("textAlign", "center")]),
        BlockType::ImageGallery => declarations(&[("padding", "20px")]),
        BlockType::Video => declarations(&[("padding", "20px"), ("textAlign", "center")]),
        BlockType::Button => declarations(&[
            ("buttonColor", "#4f46e5"),
            ("buttonTextColor", "#ffffff"),
            ("borderRadius", "6px"),
            ("textAlign", "center"),
            ("padding", "20px"),
        ]),
        BlockType::Features
        | BlockType::Testimonials
        | BlockType::Faq
        | BlockType::Team => declarations(&[
            ("backgroundColor", "#ffffff"),
            ("padding", "60px 20px"),
            ("textAlign", "center"),
        ]),
        BlockType::Pricing => declarations(&[
            ("backgroundColor", "#f9fafb"),
            ("padding", "60px 20px"),
            ("textAlign", "center"),
            ("accentColor", "#4f46e5"),
        ]),
        BlockType::Form | BlockType::ContactForm => declarations(&[
            ("backgroundColor", "#ffffff"),
            ("padding", "40px 20px"),
            ("buttonColor", "#4f46e5"),
            ("buttonTextColor", "#ffffff"),
        ]),
        BlockType::Cta => declarations(&[
            ("backgroundColor", "#111827"),
            ("color", "#ffffff"),
            ("padding", "60px 20px"),
            ("textAlign", "center"),
            ("buttonColor", "#4f46e5"),
            ("buttonTextColor", "#ffffff"),
        ]),
        BlockType::Divider => declarations(&[
            ("borderWidth", "1px"),
            ("borderStyle", "solid"),
            ("borderColor", "#e5e7eb"),
            ("marginTop", "20px"),
            ("marginBottom", "20px"),
        ]),
        BlockType::Spacer => declarations(&[("height", "40px")]),
        BlockType::Columns => declarations(&[("padding", "20px"), ("gap", "20px")]),
        BlockType::List => declarations(&[
            ("color", "#374151"),
            ("fontSize", "16px"),
            ("padding", "10px 20px"),
        ]),
        BlockType::Map => declarations(&[("padding", "20px"), ("height", "300px")]),
        BlockType::Social => declarations(&[("padding", "20px"), ("textAlign", "center")]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_border_defaults() {
        let divider = style(BlockType::Divider);
        assert_eq!(divider.or("borderWidth", ""), "1px");
        assert_eq!(divider.or("borderColor", ""), "#e5e7eb");
    }

    #[test]
    fn test_aliases_share_templates() {
        let BlockContent::Text(text) = content(BlockType::Text) else {
            panic!("expected text");
        };
        let BlockContent::RichText(rich) = content(BlockType::RichText) else {
            panic!("expected rich_text");
        };
        assert_eq!(text, rich);
    }

    #[test]
    fn test_repeating_templates_not_empty() {
        let BlockContent::Features(features) = content(BlockType::Features) else {
            panic!("expected features");
        };
        assert!(!features.features.is_empty());
    }
}
