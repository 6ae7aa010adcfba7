//! The recruiting bot: what it says first and how replies reach the
//! visitor.

pub mod conversation;
pub mod pacing;
pub mod playback;
pub mod prompt;

pub use conversation::{awaiting_first_turn, serialize_messages};
pub use pacing::pace;
pub use playback::{Playback, Reveal};
pub use prompt::Prompt;
