use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use super::listen;
use crate::constants::{ID_SEARCH_BUTTON, ID_SEARCH_INPUT};
use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;

fn submit() {
    if let Some(document) = dom_utils::document() {
        let query = dom_utils::input_value(&document, ID_SEARCH_INPUT);
        dispatch_global_message(Message::SearchSubmitted { query });
    }
}

/// `(button, input)`; search is only wired when the page has both.
pub fn search_controls(document: &Document) -> Option<(Element, Element)> {
    let button = document.get_element_by_id(ID_SEARCH_BUTTON)?;
    let input = document.get_element_by_id(ID_SEARCH_INPUT)?;
    Some((button, input))
}

pub fn setup(document: &Document) -> Result<(), wasm_bindgen::JsValue> {
    let (button, input) = match search_controls(document) {
        Some(controls) => controls,
        None => return Ok(()),
    };
    listen(&button, "click", |event| {
        event.prevent_default();
        submit();
    })?;
    listen(&input, "keydown", |event| {
        let enter = event
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Enter")
            .unwrap_or(false);
        if enter {
            event.prevent_default();
            submit();
        }
    })
}
