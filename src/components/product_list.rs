//! Product collection view bound to `#backbone-products`.
//!
//! Rendering lives in [`crate::ui_updates::render_product_list`]; this binds
//! one delegated click listener on the container, so re-renders never need
//! rebinding.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::listen;
use crate::constants::{
    ATTR_PRODUCT_ID, CSS_PRODUCT_VIEW, ID_FORM_ADD, ID_FORM_IMG, ID_FORM_PRICE, ID_FORM_TITLE,
    ID_PRODUCT_LIST, MSG_CONFIRM_PRODUCT_DELETE, SEL_PRODUCT_DELETE_BUTTON,
};
use crate::debug_log;
use crate::dom_utils;
use crate::messages::Message;
use crate::models::ProductId;
use crate::state::dispatch_global_message;

pub fn setup(document: &Document) -> Result<(), wasm_bindgen::JsValue> {
    let container = match document.get_element_by_id(ID_PRODUCT_LIST) {
        Some(c) => c,
        None => return Ok(()),
    };

    listen(&container, "click", |event| {
        let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(t) => t,
            None => return,
        };
        if target.id() == ID_FORM_ADD {
            submit_form();
        } else if let Ok(Some(button)) = target.closest(SEL_PRODUCT_DELETE_BUTTON) {
            if let Some(id) = product_id_of(&button) {
                if dom_utils::confirm(MSG_CONFIRM_PRODUCT_DELETE) {
                    dispatch_global_message(Message::ProductDeleteConfirmed(id));
                }
            }
        }
    })?;

    dispatch_global_message(Message::ProductListMounted);
    Ok(())
}

fn submit_form() {
    if let Some(document) = dom_utils::document() {
        dispatch_global_message(Message::ProductFormSubmitted {
            title: dom_utils::input_value(&document, ID_FORM_TITLE),
            price: dom_utils::input_value(&document, ID_FORM_PRICE),
            img: dom_utils::input_value(&document, ID_FORM_IMG),
        });
    }
}

/// `data-id` of the product view holding `button`.
fn product_id_of(button: &Element) -> Option<ProductId> {
    let selector = format!(".{}", CSS_PRODUCT_VIEW.replace(' ', "."));
    let view = button.closest(&selector).ok().flatten()?;
    let raw = view.get_attribute(ATTR_PRODUCT_ID)?;
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            debug_log!("product view has non-numeric data-id {:?}", raw);
            None
        }
    }
}
