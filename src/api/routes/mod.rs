//! API routes module

pub mod bot;
pub mod contact;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Bot reply streaming
        .nest("/bot", bot::router())
        // Contact details shown in the page footer
        .nest("/contact", contact::router())
}
