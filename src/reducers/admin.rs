//! Admin delete-confirmation modal: closed until a trigger names a product.

use crate::debug_log;
use crate::messages::{Command, DomPatch, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::DeleteTriggerClicked { pid } => {
            state.pending_delete = pid.clone();
            commands.push(Command::Render(DomPatch::DeleteModalVisible(true)));
            true
        }
        Message::DeleteModalDismissed => {
            state.pending_delete = None;
            commands.push(Command::Render(DomPatch::DeleteModalVisible(false)));
            true
        }
        Message::DeleteConfirmed => {
            match state.pending_delete.take() {
                Some(pid) => commands.push(Command::SubmitDeleteForm { pid }),
                None => debug_log!("delete confirmed with no pending product"),
            }
            commands.push(Command::Render(DomPatch::DeleteModalVisible(false)));
            true
        }
        _ => false,
    }
}
