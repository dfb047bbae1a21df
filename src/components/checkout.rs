use web_sys::Document;

use super::listen;
use crate::constants::{ID_CHECKOUT_BUTTON, PAYMENT_FORM_MARKERS};
use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;

/// True on the payment page, i.e. when any payment-form marker is present.
pub fn payment_form_present(document: &Document) -> bool {
    PAYMENT_FORM_MARKERS
        .iter()
        .any(|selector| matches!(document.query_selector(selector), Ok(Some(_))))
}

pub fn setup(document: &Document) -> Result<(), wasm_bindgen::JsValue> {
    let button = match document.get_element_by_id(ID_CHECKOUT_BUTTON) {
        Some(b) => b,
        None => return Ok(()),
    };
    listen(&button, "click", |event| {
        event.prevent_default();
        // Checked per click: the markup decides which page this is.
        let payment_form_present = dom_utils::document()
            .map(|d| payment_form_present(&d))
            .unwrap_or(false);
        dispatch_global_message(Message::CheckoutClicked { payment_form_present });
    })
}
