//! `form` / `contact_form` template.

use crate::block::{FormContent, FormField};
use crate::node::Element;

use super::url::safe_href;
use super::{ButtonLook, Ctx};

const INPUT_STYLE: &str = "display: block; width: 100%; box-sizing: border-box; padding: 10px 12px; \
                           border: 1px solid #d1d5db; border-radius: 6px; font-size: 16px";

pub(super) fn form(cx: &Ctx<'_>, content: &FormContent) -> Element {
    let style = cx.style();
    let look = ButtonLook::from_style(style, "#4f46e5", "#ffffff");
    let submit_text = if content.submit_text.is_empty() { "Submit" } else { content.submit_text.as_str() };

    let mut children = Vec::new();
    children.extend(cx.text_field(
        "h2",
        &content.headline,
        "headline",
        "margin: 0 0 8px; font-size: 28px",
    ));
    children.extend(cx.text_field(
        "p",
        &content.description,
        "description",
        "margin: 0 0 24px; opacity: 0.8",
    ));

    if cx.is_email() {
        // No form support in mail clients: link out to the hosted form
        let button = cx.button(submit_text, &content.action, "submitText", &look);
        children.push(Element::new("div").with_style("text-align: center").child(button));
    } else {
        let fields = content
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| form_row(cx, i, field));
        let submit = cx
            .field(Element::new("button"), "submitText")
            .attr("type", "submit")
            .with_style(format!("{}; cursor: pointer", look.css()))
            .text(submit_text);

        children.push(
            Element::new("form")
                .attr("action", safe_href(&content.action))
                .attr("method", "post")
                .with_style("max-width: 560px; margin: 0 auto; text-align: left")
                .children(fields)
                .child(submit),
        );
    }

    cx.section(style.resolve_with(&[("padding", "40px 20px")], ButtonLook::KEYS), children)
}

fn form_row(cx: &Ctx<'_>, index: usize, field: &FormField) -> Element {
    let name = if field.name.is_empty() {
        format!("field_{index}")
    } else {
        field.name.clone()
    };
    let id = format!("{}-{name}", cx.block.id);

    let label_text = if field.label.is_empty() { name.as_str() } else { field.label.as_str() };
    let mut label = cx
        .field(Element::new("label"), format!("fields.{index}.label"))
        .attr("for", id.as_str())
        .with_style("display: block; margin-bottom: 6px; font-weight: 600; font-size: 14px")
        .text(label_text);
    if field.required {
        label.push_text(" *");
    }

    let input = if field.input_type() == "textarea" {
        Element::new("textarea").attr("rows", "4")
    } else {
        Element::new("input").attr("type", field.input_type())
    };
    let mut input = input
        .attr("id", id.as_str())
        .attr("name", name.as_str())
        .attr_opt("placeholder", (!field.placeholder.is_empty()).then_some(field.placeholder.as_str()))
        .with_style(INPUT_STYLE);
    if field.required {
        input.set_attr("required", "");
    }

    Element::new("div")
        .with_style("margin-bottom: 16px")
        .child(label)
        .child(input)
}
