mod config;
pub use config::{AppConfig, DEFAULT_OPENAI_HOST, DEFAULT_OPENAI_MODEL};
