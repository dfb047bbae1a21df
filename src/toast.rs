//! Tiny toast / notification helper.
//! Creates a `#toast-container` once per page and appends toast divs that
//! fade out after a timeout, then leave the DOM.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{ID_TOAST_CONTAINER, TOAST_FADE_MS, TOAST_TIMEOUT_MS};
use crate::error_log;

/// Show `message` with the default timeout.
pub fn notify(message: &str) {
    show(message, TOAST_TIMEOUT_MS);
}

/// Show a toast for `timeout_ms`.  Failures are logged, never raised.
pub fn show(message: &str, timeout_ms: u32) {
    let document = match crate::dom_utils::document() {
        Some(d) => d,
        None => return,
    };
    if let Err(e) = try_show(&document, message, timeout_ms) {
        error_log!("toast failed: {:?}", e);
    }
}

pub(crate) fn try_show(document: &Document, message: &str, timeout_ms: u32) -> Result<HtmlElement, JsValue> {
    let root = ensure_container(document)?;

    let toast: HtmlElement = document.create_element("div")?.dyn_into()?;
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    let style = toast.style();
    for (prop, value) in [
        ("background", "rgba(0,0,0,0.85)"),
        ("color", "#fff"),
        ("padding", "10px 14px"),
        ("margin-top", "8px"),
        ("border-radius", "6px"),
        ("box-shadow", "0 2px 6px rgba(0,0,0,0.3)"),
        ("font-size", "14px"),
        ("transition", "opacity 0.4s"),
        ("opacity", "1"),
    ] {
        style.set_property(prop, value)?;
    }
    root.append_child(&toast)?;

    let fading = toast.clone();
    Timeout::new(timeout_ms, move || {
        let _ = fading.style().set_property("opacity", "0");
        Timeout::new(TOAST_FADE_MS, move || fading.remove()).forget();
    })
    .forget();

    Ok(toast)
}

fn ensure_container(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id(ID_TOAST_CONTAINER) {
        return Ok(el);
    }
    let root: HtmlElement = document.create_element("div")?.dyn_into()?;
    root.set_id(ID_TOAST_CONTAINER);
    let style = root.style();
    style.set_property("position", "fixed")?;
    style.set_property("right", "16px")?;
    style.set_property("bottom", "16px")?;
    style.set_property("z-index", "9999")?;
    let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&root)?;
    Ok(root.unchecked_into())
}
