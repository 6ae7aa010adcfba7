use crate::core::AppConfig;

/// Read only state shared by every request. Anything that changes
/// during a request lives with that request.
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
