use web_sys::Document;

use super::{event_element, listen};
use crate::constants::{ATTR_PID, SEL_FAVORITE};
use crate::dom_utils::{non_empty_attr, query_all};
use crate::messages::Message;
use crate::state::dispatch_global_message;

pub fn setup(document: &Document) -> Result<(), wasm_bindgen::JsValue> {
    for button in query_all(document, SEL_FAVORITE) {
        listen(&button, "click", |event| {
            if let Some(pid) = event_element(&event).and_then(|el| non_empty_attr(&el, ATTR_PID)) {
                dispatch_global_message(Message::FavoriteClicked { pid });
            }
        })?;
    }
    Ok(())
}
