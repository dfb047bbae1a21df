use web_sys::Document;

use super::{event_element, listen};
use crate::constants::{ATTR_PID, ATTR_SUBTOTAL, SEL_ADD_TO_CART, SEL_CART_LINE, SEL_REMOVE_FROM_CART};
use crate::dom_utils::{non_empty_attr, query_all};
use crate::messages::Message;
use crate::models::Pid;
use crate::money::parse_line_subtotal;
use crate::state::dispatch_global_message;

/// `(pid, data-subtotal)` for each remove button inside a cart line.
pub fn snapshot_cart_lines(document: &Document) -> Vec<(Pid, f64)> {
    query_all(document, SEL_REMOVE_FROM_CART)
        .into_iter()
        .filter_map(|button| {
            let pid = non_empty_attr(&button, ATTR_PID)?;
            let line = button.closest(SEL_CART_LINE).ok().flatten()?;
            let subtotal = parse_line_subtotal(line.get_attribute(ATTR_SUBTOTAL).as_deref());
            Some((pid, subtotal))
        })
        .collect()
}

pub fn setup(document: &Document) -> Result<(), wasm_bindgen::JsValue> {
    for button in query_all(document, SEL_ADD_TO_CART) {
        listen(&button, "click", |event| {
            if let Some(pid) = event_element(&event).and_then(|el| non_empty_attr(&el, ATTR_PID)) {
                dispatch_global_message(Message::AddToCartClicked { pid });
            }
        })?;
    }
    for button in query_all(document, SEL_REMOVE_FROM_CART) {
        listen(&button, "click", |event| {
            if let Some(pid) = event_element(&event).and_then(|el| non_empty_attr(&el, ATTR_PID)) {
                dispatch_global_message(Message::RemoveFromCartClicked { pid });
            }
        })?;
    }
    Ok(())
}
