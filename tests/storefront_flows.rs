//! End-to-end flows through the public `update` function, from boot snapshot
//! to the commands the executors would run.
//!
//! Run with: cargo test --test storefront_flows

use storefront_frontend::csrf::CsrfToken;
use storefront_frontend::messages::{Command, DomPatch, Message};
use storefront_frontend::models::{CartUpdate, FavoriteUpdate, Outcome};
use storefront_frontend::money::CartTotals;
use storefront_frontend::network::{ApiConfig, FetchError};
use storefront_frontend::state::{AppState, PageSnapshot};
use storefront_frontend::update::update;

fn booted(cart_lines: Vec<(&str, f64)>, subtotal: f64) -> AppState {
    let mut state = AppState::new();
    let snapshot = PageSnapshot {
        csrf: CsrfToken::new("tok-abc"),
        api: ApiConfig::default(),
        cart_count: Some(cart_lines.len() as u32),
        totals: CartTotals { subtotal, total: subtotal },
        cart_lines: cart_lines.into_iter().map(|(pid, v)| (pid.to_string(), v)).collect(),
    };
    assert!(update(&mut state, Message::Boot(Box::new(snapshot))).is_empty());
    state
}

fn cart_update(total_items: u32) -> Result<Outcome<CartUpdate>, FetchError> {
    Ok(Outcome::Accepted(CartUpdate { total_items: Some(total_items), ..Default::default() }))
}

#[test]
fn add_to_cart_for_pid_42() {
    let mut state = booted(vec![], 0.0);

    let commands = update(&mut state, Message::AddToCartClicked { pid: "42".into() });
    assert_eq!(commands, vec![Command::PostAddToCart { pid: "42".into() }]);
    assert!(commands[0].is_network());

    let commands = update(&mut state, Message::AddToCartFinished { pid: "42".into(), result: cart_update(3) });
    assert!(commands.contains(&Command::Render(DomPatch::CartCount(3))));
    assert!(commands.contains(&Command::Render(DomPatch::FlashAdded { pid: "42".into(), duration_ms: 800 })));
    assert_eq!(state.cart_count, Some(3));
}

#[test]
fn emptying_the_cart() {
    let mut state = booted(vec![("1", 17000.0), ("2", 450.0)], 17450.0);

    update(&mut state, Message::RemoveFromCartFinished { pid: "1".into(), result: cart_update(1) });
    assert_eq!(state.totals, CartTotals { subtotal: 450.0, total: 450.0 });

    let commands = update(&mut state, Message::RemoveFromCartFinished { pid: "2".into(), result: cart_update(0) });
    assert_eq!(state.totals, CartTotals { subtotal: 0.0, total: 0.0 });
    assert_eq!(commands.iter().filter(|c| **c == Command::Render(DomPatch::EmptyCart)).count(), 1);
    assert!(commands.contains(&Command::Render(DomPatch::CartTotals(CartTotals::default()))));
}

#[test]
fn favorite_added_then_removed() {
    let mut state = booted(vec![], 0.0);
    for action in ["added", "removed"] {
        let result = Ok(Outcome::Accepted(FavoriteUpdate { action: Some(action.into()) }));
        update(&mut state, Message::FavoriteFinished { pid: "5".into(), result });
    }
    assert!(state.favorites.is_empty());
}

#[test]
fn checkout_from_cart_page_only_navigates() {
    let mut state = booted(vec![("1", 10.0)], 10.0);
    let commands = update(&mut state, Message::CheckoutClicked { payment_form_present: false });
    assert_eq!(commands, vec![Command::Navigate("/pagar".into())]);
}

#[test]
fn checkout_network_failure_posts_one_form_with_token() {
    let mut state = booted(vec![("1", 10.0)], 10.0);
    let commands = update(&mut state, Message::CheckoutClicked { payment_form_present: true });
    assert_eq!(commands.iter().filter(|c| c.is_network()).count(), 1);

    // A second click while in flight does nothing.
    assert!(update(&mut state, Message::CheckoutClicked { payment_form_present: true }).is_empty());

    let commands = update(&mut state, Message::CheckoutFinished(Err(FetchError::Network("offline".into()))));
    let forms: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            Command::SubmitCheckoutFallback { csrf_token } => Some(csrf_token.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(forms, vec!["tok-abc"]);
}

#[test]
fn search_redirects_with_encoded_query() {
    let mut state = booted(vec![], 0.0);
    let commands = update(&mut state, Message::SearchSubmitted { query: "audífonos & control".into() });
    assert_eq!(commands, vec![Command::Navigate("/?q=aud%C3%ADfonos%20%26%20control".into())]);
}

#[test]
fn reboot_replaces_snapshot() {
    let mut state = booted(vec![("1", 10.0)], 10.0);
    update(&mut state, Message::Boot(Box::new(PageSnapshot::default())));
    assert!(state.cart_lines.is_empty());
    assert_eq!(state.totals, CartTotals::default());
}
