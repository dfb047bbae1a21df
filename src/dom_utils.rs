//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Helpers that look elements up return `Option`/`Vec` and never panic, so
//! every handler stays a no-op on pages that lack its markup.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Every element matching `selector`, in document order.  An invalid
/// selector yields nothing.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// `{base}[{attr}="{value}"]` with the value quoted for a CSS string.
pub fn attr_selector(base: &str, attr: &str, value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\a "),
            _ => escaped.push(c),
        }
    }
    format!("{}[{}=\"{}\"]", base, attr, escaped)
}

/// Non-empty attribute value, if any.
pub fn non_empty_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name).filter(|v| !v.trim().is_empty())
}

/// `style.display = "block"`.
pub fn show(el: &Element) {
    set_display(el, "block");
}

/// `style.display = "none"`.
pub fn hide(el: &Element) {
    set_display(el, "none");
}

fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

pub fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn set_input_value(document: &Document, id: &str, value: &str) {
    if let Some(input) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking `confirm()`; a missing window or a thrown dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn navigate(url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    window.location().set_href(url)
}

/// Build `<form method=POST action=…>` with one hidden input per field,
/// attach it to the body and return it unsubmitted.
pub fn build_hidden_form(
    document: &Document,
    action: &str,
    fields: &[(&str, &str)],
) -> Result<HtmlFormElement, JsValue> {
    let form: HtmlFormElement = document.create_element("form")?.dyn_into()?;
    form.set_method("POST");
    form.set_action(action);
    for (name, value) in fields {
        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)?;
    }
    let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&form)?;
    Ok(form)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
