//! Cart domain reducer: add-to-cart, remove-from-cart and the running totals.

use crate::constants::{
    ADDED_FLASH_MS, MSG_ADDED_TO_CART, MSG_ADD_FAILED, MSG_ADD_REJECTED, MSG_REMOVED_FROM_CART,
    MSG_REMOVE_FAILED, MSG_REMOVE_REJECTED,
};
use crate::debug_log;
use crate::messages::{Command, DomPatch, Message};
use crate::models::{CartUpdate, Outcome};
use crate::state::AppState;

/// Handles cart-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::AddToCartClicked { pid } => {
            commands.push(Command::PostAddToCart { pid: pid.clone() });
            true
        }
        Message::AddToCartFinished { pid, result } => {
            match result {
                Ok(Outcome::Accepted(update)) => {
                    set_cart_count(state, update, commands);
                    commands.push(Command::Render(DomPatch::FlashAdded {
                        pid: pid.clone(),
                        duration_ms: ADDED_FLASH_MS,
                    }));
                    commands.push(Command::Toast(MSG_ADDED_TO_CART.to_string()));
                }
                Ok(Outcome::Rejected(reason)) => {
                    commands.push(Command::Toast(rejection(MSG_ADD_REJECTED, reason.as_deref())));
                }
                Err(e) => {
                    debug_log!("cart/add pid={} failed: {}", pid, e);
                    commands.push(Command::Toast(MSG_ADD_FAILED.to_string()));
                }
            }
            true
        }
        Message::RemoveFromCartClicked { pid } => {
            commands.push(Command::PostRemoveFromCart { pid: pid.clone() });
            true
        }
        Message::RemoveFromCartFinished { pid, result } => {
            match result {
                Ok(Outcome::Accepted(update)) => {
                    let removed_line = state.cart_lines.remove(pid);
                    let mut totals = state.totals;
                    if let Some(line_subtotal) = removed_line {
                        commands.push(Command::Render(DomPatch::RemoveCartLine { pid: pid.clone() }));
                        totals = totals.after_removal(line_subtotal);
                    }
                    // Server amounts win over the client-side arithmetic.
                    if let Some(subtotal) = update.subtotal {
                        totals.subtotal = subtotal.max(0.0);
                    }
                    if let Some(total) = update.total {
                        totals.total = total.max(0.0);
                    }
                    if totals != state.totals || removed_line.is_some() {
                        state.totals = totals;
                        commands.push(Command::Render(DomPatch::CartTotals(totals)));
                    }

                    set_cart_count(state, update, commands);
                    commands.push(Command::Toast(MSG_REMOVED_FROM_CART.to_string()));

                    if state.cart_lines.is_empty() {
                        commands.push(Command::Render(DomPatch::EmptyCart));
                    }
                }
                Ok(Outcome::Rejected(reason)) => {
                    commands.push(Command::Toast(rejection(MSG_REMOVE_REJECTED, reason.as_deref())));
                }
                Err(e) => {
                    debug_log!("cart/remove pid={} failed: {}", pid, e);
                    commands.push(Command::Toast(MSG_REMOVE_FAILED.to_string()));
                }
            }
            true
        }
        _ => false,
    }
}

fn set_cart_count(state: &mut AppState, update: &CartUpdate, commands: &mut Vec<Command>) {
    if let Some(count) = update.total_items {
        state.cart_count = Some(count);
        commands.push(Command::Render(DomPatch::CartCount(count)));
    }
}

/// `"{base}: {reason}"`, or just `base` when the server gave no reason.
pub(crate) fn rejection(base: &str, reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!("{}: {}", base, reason),
        None => base.to_string(),
    }
}
