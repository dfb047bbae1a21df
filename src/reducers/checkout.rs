//! Checkout reducer: the two-page state machine behind `#checkoutBtn`.
//!
//! Cart page (no payment form): the button only navigates to `/pagar`.
//! Payment page: the button POSTs `/checkout`, with a plain form submit as
//! the fallback when the answer is not JSON or the request fails. The button
//! stays disabled on the fallback paths since the page is navigating away.

use crate::constants::{
    CHECKOUT_REDIRECT_DELAY_MS, MSG_CHECKOUT_NETWORK, MSG_CHECKOUT_NON_JSON, MSG_CHECKOUT_PLACED,
    MSG_CHECKOUT_PROCESSING, MSG_CHECKOUT_UNRECOGNIZED, PATH_HOME, PATH_PAYMENT_PAGE,
};
use crate::debug_log;
use crate::messages::{Command, DomPatch, Message};
use crate::models::CheckoutOutcome;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::CheckoutClicked { payment_form_present } => {
            if !payment_form_present {
                commands.push(Command::Navigate(PATH_PAYMENT_PAGE.to_string()));
            } else if state.checkout_in_flight {
                debug_log!("checkout already in flight, click ignored");
            } else {
                state.checkout_in_flight = true;
                commands.push(Command::Render(DomPatch::CheckoutBusy(true)));
                commands.push(Command::Toast(MSG_CHECKOUT_PROCESSING.to_string()));
                commands.push(Command::PostCheckout);
            }
            true
        }
        Message::CheckoutFinished(result) => {
            match result {
                Ok(CheckoutOutcome::Placed { order_id }) => {
                    release(state, commands);
                    let toast = match order_id {
                        Some(id) => format!("{}: {}", MSG_CHECKOUT_PLACED, id),
                        None => MSG_CHECKOUT_PLACED.to_string(),
                    };
                    commands.push(Command::Toast(toast));
                    commands.push(Command::NavigateAfter {
                        url: PATH_HOME.to_string(),
                        delay_ms: CHECKOUT_REDIRECT_DELAY_MS,
                    });
                }
                Ok(CheckoutOutcome::Rejected(error)) => {
                    release(state, commands);
                    commands.push(Command::Toast(format!("Error: {}", error)));
                }
                Ok(CheckoutOutcome::NonJson { status, .. }) => {
                    debug_log!("checkout answered non-JSON (status {}), submitting form", status);
                    commands.push(Command::Toast(MSG_CHECKOUT_NON_JSON.to_string()));
                    commands.push(fallback(state));
                }
                Ok(CheckoutOutcome::Unrecognized) => {
                    release(state, commands);
                    commands.push(Command::Toast(MSG_CHECKOUT_UNRECOGNIZED.to_string()));
                }
                Err(e) => {
                    debug_log!("checkout failed: {}", e);
                    commands.push(Command::Toast(MSG_CHECKOUT_NETWORK.to_string()));
                    commands.push(fallback(state));
                }
            }
            true
        }
        _ => false,
    }
}

fn release(state: &mut AppState, commands: &mut Vec<Command>) {
    state.checkout_in_flight = false;
    commands.push(Command::Render(DomPatch::CheckoutBusy(false)));
}

fn fallback(state: &AppState) -> Command {
    Command::SubmitCheckoutFallback {
        csrf_token: state.csrf.as_str().to_string(),
    }
}
