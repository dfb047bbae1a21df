//! Turns [`Command`]s into browser effects.  Network commands spawn a future
//! per request; each future re-enters the store with a `*Finished` message.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use crate::constants::{ATTR_PID, PATH_CHECKOUT, SEL_DELETE_FORM};
use crate::dom_utils::{self, attr_selector};
use crate::error_log;
use crate::messages::{Command, Message};
use crate::network::ApiClient;
use crate::state::dispatch_global_message;
use crate::{toast, ui_updates};

pub fn execute_network_command(client: &ApiClient, cmd: Command) {
    let client = client.clone();
    match cmd {
        Command::PostAddToCart { pid } => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.add_to_cart(&pid).await;
                dispatch_global_message(Message::AddToCartFinished { pid, result });
            });
        }
        Command::PostRemoveFromCart { pid } => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.remove_from_cart(&pid).await;
                dispatch_global_message(Message::RemoveFromCartFinished { pid, result });
            });
        }
        Command::PostFavoriteToggle { pid } => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.toggle_favorite(&pid).await;
                dispatch_global_message(Message::FavoriteFinished { pid, result });
            });
        }
        Command::PostCheckout => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.checkout().await;
                dispatch_global_message(Message::CheckoutFinished(result));
            });
        }
        Command::FetchProducts => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.fetch_products().await;
                dispatch_global_message(Message::ProductsLoaded(result));
            });
        }
        Command::CreateProduct(product) => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.create_product(&product).await;
                dispatch_global_message(Message::ProductCreated(result));
            });
        }
        Command::DeleteProduct(id) => {
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.delete_product(id).await;
                dispatch_global_message(Message::ProductDeleted { id, result });
            });
        }
        other => execute_ui_command(other),
    }
}

pub fn execute_ui_command(cmd: Command) {
    let document = match dom_utils::document() {
        Some(d) => d,
        None => return,
    };
    match cmd {
        Command::Render(patch) => {
            if let Err(e) = ui_updates::apply(&document, &patch) {
                error_log!("failed to apply {:?}: {:?}", patch, e);
            }
        }
        Command::Toast(message) => toast::notify(&message),
        Command::Alert(message) => dom_utils::alert(&message),
        Command::Navigate(url) => {
            if let Err(e) = dom_utils::navigate(&url) {
                error_log!("navigation to {} failed: {:?}", url, e);
            }
        }
        Command::NavigateAfter { url, delay_ms } => {
            Timeout::new(delay_ms, move || {
                let _ = dom_utils::navigate(&url);
            })
            .forget();
        }
        Command::SubmitCheckoutFallback { csrf_token } => {
            let submitted = dom_utils::build_hidden_form(
                &document,
                PATH_CHECKOUT,
                &[("csrf_token", csrf_token.as_str())],
            )
            .and_then(|form| form.submit());
            if let Err(e) = submitted {
                error_log!("checkout fallback form failed: {:?}", e);
            }
        }
        Command::SubmitDeleteForm { pid } => {
            if let Some(form) = delete_form(&document, &pid) {
                if let Err(e) = form.submit() {
                    error_log!("delete form for {} failed: {:?}", pid, e);
                }
            }
        }
        other => error_log!("not a UI command: {:?}", other),
    }
}

/// The server-rendered `.product-delete-form` for `pid`, if on the page.
pub fn delete_form(document: &Document, pid: &str) -> Option<HtmlFormElement> {
    document
        .query_selector(&attr_selector(SEL_DELETE_FORM, ATTR_PID, pid))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
}
