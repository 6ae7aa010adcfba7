use crate::bot::prompt::Prompt;
use crate::openai::{Message, Role};

/// Number of messages that seed every conversation: the system
/// instruction and the canned opening reply.
pub const SEED_LEN: usize = 2;

/// Turn the raw turns sent by the client into the transcript passed to
/// the completion API. The client sends every turn it has rendered,
/// starting with the opening reply it was shown, so turns alternate
/// assistant/user from the first one.
pub fn serialize_messages(turns: &[String]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(turns.len() + SEED_LEN);
    messages.push(Message::new(Role::System, Prompt::SystemInstruction.text()));
    messages.push(Message::new(Role::Assistant, Prompt::Opening.text()));

    for (idx, turn) in turns.iter().enumerate() {
        let role = if idx % 2 == 0 {
            Role::Assistant
        } else {
            Role::User
        };
        messages.push(Message::new(role, turn));
    }

    messages
}

/// True when the visitor hasn't said anything yet and the opening
/// reply should be played back.
pub fn awaiting_first_turn(messages: &[Message]) -> bool {
    messages.len() == SEED_LEN
}
