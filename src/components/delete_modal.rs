//! Admin delete-confirmation modal.
//!
//! The modal markup is server-rendered; this only wires its controls and the
//! `.delete-trigger` buttons to the store.

use web_sys::Document;

use super::{event_element, listen};
use crate::constants::{
    ATTR_PID, ID_CANCEL_DELETE, ID_CONFIRM_DELETE, ID_DELETE_MODAL, SEL_DELETE_TRIGGER,
    SEL_MODAL_CLOSE,
};
use crate::dom_utils::{non_empty_attr, query_all};
use crate::messages::Message;
use crate::state::dispatch_global_message;

pub fn setup(document: &Document) -> Result<(), wasm_bindgen::JsValue> {
    let modal = match document.get_element_by_id(ID_DELETE_MODAL) {
        Some(m) => m,
        None => return Ok(()),
    };

    for trigger in query_all(document, SEL_DELETE_TRIGGER) {
        listen(&trigger, "click", |event| {
            event.prevent_default();
            let pid = event_element(&event).and_then(|el| non_empty_attr(&el, ATTR_PID));
            dispatch_global_message(Message::DeleteTriggerClicked { pid });
        })?;
    }

    if let Some(close) = modal.query_selector(SEL_MODAL_CLOSE)? {
        listen(&close, "click", |_| dispatch_global_message(Message::DeleteModalDismissed))?;
    }
    if let Some(cancel) = document.get_element_by_id(ID_CANCEL_DELETE) {
        listen(&cancel, "click", |event| {
            event.prevent_default();
            dispatch_global_message(Message::DeleteModalDismissed);
        })?;
    }
    if let Some(confirm) = document.get_element_by_id(ID_CONFIRM_DELETE) {
        listen(&confirm, "click", |event| {
            event.prevent_default();
            dispatch_global_message(Message::DeleteConfirmed);
        })?;
    }

    // Backdrop click: only when the modal itself is the target.
    if let Some(window) = web_sys::window() {
        let backdrop = modal.clone();
        listen(&window, "click", move |event| {
            if let Some(target) = event.target() {
                if js_sys::Object::is(&target, &backdrop) {
                    dispatch_global_message(Message::DeleteModalDismissed);
                }
            }
        })?;
    }
    Ok(())
}
