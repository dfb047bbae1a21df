use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::utils::encode_uri_component;

/// `/?q=<query>`; a full page load, not an async search.
pub fn search_url(query: &str) -> String {
    format!("/?q={}", encode_uri_component(query))
}

pub fn update(_state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SearchSubmitted { query } => {
            commands.push(Command::Navigate(search_url(query)));
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigates_with_encoded_query() {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        update(&mut state, &Message::SearchSubmitted { query: "xbox series x".into() }, &mut commands);
        assert_eq!(commands, vec![Command::Navigate("/?q=xbox%20series%20x".into())]);
    }

    #[test]
    fn empty_query_still_navigates() {
        assert_eq!(search_url(""), "/?q=");
    }
}
