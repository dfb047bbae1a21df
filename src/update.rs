// src/update.rs
//
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::reducers;
use crate::state::AppState;

/// The single state-transition function.  Reducers only mutate the store and
/// describe effects; nothing here touches the DOM or the network.
pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if let Message::Boot(snapshot) = msg {
        state.load_snapshot(*snapshot);
        return commands;
    }

    let handled = reducers::cart::update(state, &msg, &mut commands)
        || reducers::favorites::update(state, &msg, &mut commands)
        || reducers::search::update(state, &msg, &mut commands)
        || reducers::checkout::update(state, &msg, &mut commands)
        || reducers::admin::update(state, &msg, &mut commands)
        || reducers::products::update(state, &msg, &mut commands);

    if !handled {
        debug_log!("unhandled message: {:?}", msg);
    }

    commands
}
