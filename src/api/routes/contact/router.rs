//! Router for the contact API

use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};

use super::public::ContactResponse;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

async fn contact(State(state): State<SharedState>) -> Json<ContactResponse> {
    Json(ContactResponse {
        email: state.config.contact_email.clone(),
    })
}

/// Create the contact router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(contact))
}
