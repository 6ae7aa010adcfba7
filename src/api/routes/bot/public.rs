//! Public types for the bot API
use serde::{Deserialize, Serialize};

/// Every turn rendered so far, oldest first. Empty when the page has
/// just loaded and wants the opening reply.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct BotRequest {
    pub messages: Vec<String>,
}

impl BotRequest {
    pub fn new(messages: &[String]) -> Self {
        Self {
            messages: messages.to_vec(),
        }
    }
}
