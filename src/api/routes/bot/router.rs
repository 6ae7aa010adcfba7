//! Router for the bot API

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use tokio::sync::mpsc;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::bot::{Playback, Prompt, Reveal, awaiting_first_turn, pace, serialize_messages};
use crate::core::AppConfig;
use crate::openai::completion_stream;

type SharedState = Arc<AppState>;

/// Stream the bot's next reply as plain text fragments. The opening
/// reply is played back locally, everything after that comes from
/// the completion API.
async fn bot_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    // The page posts raw bytes without a content type so this can't
    // use the `Json` extractor
    let payload =
        serde_json::from_slice::<public::BotRequest>(&body).map_err(ApiError::bad_request)?;
    let messages = serialize_messages(&payload.messages);

    let (tx, rx) = mpsc::unbounded_channel::<String>();

    let interval = if awaiting_first_turn(&messages) {
        tracing::debug!("Playing back opening reply");

        // Queue every word up front, the pacing task sets the cadence
        for chunk in Playback::new(Prompt::Opening.text(), Reveal::Incremental) {
            let _ = tx.send(chunk);
        }
        drop(tx);
        state.config.playback_interval
    } else {
        tracing::debug!("Requesting completion for {} turns", payload.messages.len());

        let AppConfig {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            ..
        } = state.config.clone();

        tokio::spawn(async move {
            let result = completion_stream(
                tx,
                &messages,
                &openai_api_hostname,
                &openai_api_key,
                &openai_model,
            )
            .await;

            match result {
                Ok(content) => tracing::debug!("Completion finished ({} bytes)", content.len()),
                Err(e) => {
                    tracing::error!("Completion stream error: {}. Root cause: {}", e, e.root_cause())
                }
            }
        });
        state.config.live_pacing_interval
    };

    let stream = UnboundedReceiverStream::new(pace(rx, interval)).map(Ok::<String, Infallible>);

    let resp = (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(stream),
    )
        .into_response();

    Ok(resp)
}

/// Create the bot router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(bot_handler))
}
