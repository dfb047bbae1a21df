//! Favorites reducer.  The store mirrors the server's answer; it is never
//! consulted to decide what a click should do.

use super::cart::rejection;
use crate::constants::{
    MSG_FAVORITE_ADDED, MSG_FAVORITE_FAILED, MSG_FAVORITE_REJECTED, MSG_FAVORITE_REMOVED,
};
use crate::debug_log;
use crate::messages::{Command, DomPatch, Message};
use crate::models::{FavoriteAction, Outcome};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::FavoriteClicked { pid } => {
            commands.push(Command::PostFavoriteToggle { pid: pid.clone() });
            true
        }
        Message::FavoriteFinished { pid, result } => {
            match result {
                Ok(Outcome::Accepted(update)) => {
                    let (active, toast) = match FavoriteAction::from_server(update.action.as_deref()) {
                        FavoriteAction::Added => {
                            state.favorites.insert(pid.clone());
                            (true, MSG_FAVORITE_ADDED)
                        }
                        FavoriteAction::Removed => {
                            state.favorites.remove(pid);
                            (false, MSG_FAVORITE_REMOVED)
                        }
                    };
                    commands.push(Command::Render(DomPatch::FavoriteActive { pid: pid.clone(), active }));
                    commands.push(Command::Toast(toast.to_string()));
                }
                Ok(Outcome::Rejected(reason)) => {
                    commands.push(Command::Toast(rejection(MSG_FAVORITE_REJECTED, reason.as_deref())));
                }
                Err(e) => {
                    debug_log!("favorites/toggle pid={} failed: {}", pid, e);
                    commands.push(Command::Toast(MSG_FAVORITE_FAILED.to_string()));
                }
            }
            true
        }
        _ => false,
    }
}
