mod core;
pub mod stream;

pub use self::core::{Message, Role, completion_stream};
