use std::time::Duration;

use anyhow::{Result, bail};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::api::public::bot::BotRequest;

/// Consumes the bot endpoint the same way the chat page does: one
/// request per reply, body read as it arrives.
#[derive(Clone, Debug)]
pub struct BotClient {
    base_url: String,
    http: reqwest::Client,
}

impl BotClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Request the next reply for `history` and send every decoded
    /// piece of the response body to `tx` until the server closes the
    /// stream.
    pub async fn stream_reply(
        &self,
        history: &[String],
        tx: mpsc::UnboundedSender<String>,
    ) -> Result<()> {
        let url = format!("{}/api/bot", self.base_url);
        let body = serde_json::to_vec(&BotRequest::new(history))?;
        let response = self
            .http
            .post(url)
            .timeout(Duration::from_secs(60 * 5))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let msg = response.text().await.unwrap_or_default();
            bail!("Bot request failed with status {}: {}", status, msg);
        }

        let mut stream = response.bytes_stream();
        let mut pending = Vec::new();

        while let Some(chunk) = stream.next().await {
            pending.extend_from_slice(&chunk?);
            let text = take_utf8(&mut pending)?;
            if text.is_empty() {
                continue;
            }
            if tx.send(text).is_err() {
                tracing::debug!("Reply receiver dropped");
                return Ok(());
            }
        }

        if !pending.is_empty() {
            bail!("Reply ended in the middle of a UTF-8 sequence");
        }

        Ok(())
    }
}

// Take the longest valid UTF-8 prefix out of `buf`, leaving an
// incomplete trailing character for the next chunk to finish
fn take_utf8(buf: &mut Vec<u8>) -> Result<String> {
    let valid_up_to = match std::str::from_utf8(buf) {
        Ok(_) => buf.len(),
        Err(e) if e.error_len().is_none() => e.valid_up_to(),
        Err(e) => return Err(e.into()),
    };
    let rest = buf.split_off(valid_up_to);
    let text = String::from_utf8(std::mem::replace(buf, rest))?;
    Ok(text)
}
