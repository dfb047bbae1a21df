use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use super::listen;
use crate::constants::{MSG_INVALID_PRICE, SEL_PRICE_FIELD};
use crate::dom_utils::{self, query_all};
use crate::validation::validate_price;

/// Guard every form that has a price field.  Checked at submit time only.
pub fn setup(document: &Document) -> Result<(), wasm_bindgen::JsValue> {
    for form in query_all(document, "form") {
        let field = match form.query_selector(SEL_PRICE_FIELD)? {
            Some(f) => f,
            None => continue,
        };
        listen(&form, "submit", move |event| {
            if block_invalid_price(&field, &event) {
                dom_utils::alert(MSG_INVALID_PRICE);
            }
        })?;
    }
    Ok(())
}

/// Cancel `event` when `field` does not hold a valid price.  Returns whether
/// the submission was blocked.
pub fn block_invalid_price(field: &Element, event: &Event) -> bool {
    if validate_price(&field_value(field)).is_ok() {
        return false;
    }
    event.prevent_default();
    true
}

fn field_value(field: &Element) -> String {
    field
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| field.get_attribute("value"))
        .unwrap_or_default()
}
