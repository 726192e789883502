//! Message processing: runs update() to a fixed point and dispatches actions

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action);
        }

        msg = result.message;
    }
}
