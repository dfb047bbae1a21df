//! Event bindings.  Each component attaches listeners only when its markup is
//! on the page and translates browser events into [`crate::messages::Message`]s.

pub mod cart;
pub mod checkout;
pub mod delete_modal;
pub mod favorites;
pub mod price_validator;
pub mod product_list;
pub mod search;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget};

use crate::error_log;

/// Bind every component, logging the ones that fail without stopping the rest.
pub fn setup_all(document: &Document) {
    let results = [
        ("cart", cart::setup(document)),
        ("favorites", favorites::setup(document)),
        ("search", search::setup(document)),
        ("checkout", checkout::setup(document)),
        ("delete_modal", delete_modal::setup(document)),
        ("price_validator", price_validator::setup(document)),
        ("product_list", product_list::setup(document)),
    ];
    for (name, result) in results {
        if let Err(e) = result {
            error_log!("{} setup failed: {:?}", name, e);
        }
    }
}

/// Attach a listener that lives as long as the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// The element an event was dispatched from.
pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event.current_target().and_then(|t| t.dyn_into::<Element>().ok())
}
