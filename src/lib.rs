use wasm_bindgen::prelude::*;
use web_sys::Document;

mod macros;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod csrf;
pub mod dom_utils;
pub mod messages; // Message, Command and DomPatch
pub mod models;
pub mod money;
pub mod network;
pub mod reducers;
pub mod state;
pub mod toast;
pub mod ui_updates;
pub mod update; // Root state-transition function
pub mod utils;
pub mod validation;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

use messages::Message;
use state::{dispatch_global_message, PageSnapshot};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Some(document) = dom_utils::document() {
                boot(&document);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot(&document);
    }
    Ok(())
}

/// Seed the store from the rendered page, then bind every component whose
/// markup is present.
pub fn boot(document: &Document) {
    dispatch_global_message(Message::Boot(Box::new(PageSnapshot::capture(document))));
    components::setup_all(document);
    debug_log!("storefront frontend ready");
}
