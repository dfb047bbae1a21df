//! Per-domain reducers.
//!
//! Each returns `true` when it recognised the message; the root
//! `update.rs` tries them in turn.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod favorites;
pub mod products;
pub mod search;
