//! Consumer side of the bot endpoint, used by the terminal chat.

mod relay;
mod session;

pub use relay::BotClient;
pub use session::{ChatSession, ReplyState};
