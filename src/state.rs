use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use web_sys::Document;

use crate::command_executors;
use crate::constants::{ID_CART_COUNT, ID_SUBTOTAL, ID_TOTAL};
use crate::csrf::CsrfToken;
use crate::{debug_log, error_log};
use crate::messages::{Command, Message};
use crate::models::{Pid, Product};
use crate::money::CartTotals;
use crate::network::{ApiClient, ApiConfig};
use crate::update::update;

/// What the server-rendered page tells us at boot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSnapshot {
    pub csrf: CsrfToken,
    pub api: ApiConfig,
    pub cart_count: Option<u32>,
    pub totals: CartTotals,
    /// `(pid, data-subtotal)` for each displayed cart line.
    pub cart_lines: Vec<(Pid, f64)>,
}

impl PageSnapshot {
    pub fn capture(document: &Document) -> Self {
        let text_of = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.text_content())
        };
        Self {
            csrf: CsrfToken::from_document(document),
            api: ApiConfig::resolve(document),
            cart_count: text_of(ID_CART_COUNT).and_then(|t| t.trim().parse().ok()),
            totals: CartTotals::from_display(
                text_of(ID_SUBTOTAL).as_deref(),
                text_of(ID_TOTAL).as_deref(),
            ),
            cart_lines: crate::components::cart::snapshot_cart_lines(document),
        }
    }
}

// Store global application state
#[derive(Debug, Default)]
pub struct AppState {
    pub csrf: CsrfToken,
    pub api: ApiConfig,
    /// Last value written to `#cart-count`.
    pub cart_count: Option<u32>,
    pub totals: CartTotals,
    /// Line subtotal per displayed cart line.
    pub cart_lines: BTreeMap<Pid, f64>,
    /// Mirror of the last server-reported favorite action per pid.
    pub favorites: BTreeSet<Pid>,
    /// Product awaiting confirmation in the admin delete modal.
    pub pending_delete: Option<Pid>,
    pub checkout_in_flight: bool,
    pub products: Vec<Product>,
    pub product_list_mounted: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from the page.  Later boots replace earlier ones.
    pub fn load_snapshot(&mut self, snapshot: PageSnapshot) {
        debug_log!(
            "boot: {} cart lines, count={:?}",
            snapshot.cart_lines.len(),
            snapshot.cart_count
        );
        if snapshot.csrf.is_empty() {
            error_log!("no csrf-token meta tag; cart, favorite and checkout requests will be rejected");
        }
        self.csrf = snapshot.csrf;
        self.api = snapshot.api;
        self.cart_count = snapshot.cart_count;
        self.totals = snapshot.totals;
        self.cart_lines = snapshot.cart_lines.into_iter().collect();
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.api.clone(), self.csrf.clone())
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Run `msg` through the store, then execute the resulting commands once the
/// borrow is released.  Network results re-enter here from their futures.
pub fn dispatch_global_message(msg: Message) {
    // 1. Perform state updates and collect commands
    let (commands, client) = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        let commands = state.dispatch(msg);
        (commands, state.api_client())
    });

    // 2. Execute commands after state borrow is dropped
    for cmd in commands {
        if cmd.is_network() {
            command_executors::execute_network_command(&client, cmd);
        } else {
            command_executors::execute_ui_command(cmd);
        }
    }
}
