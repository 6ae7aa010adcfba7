use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::{Error, Result, bail};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::mpsc;

use super::stream::{EventDecoder, Record};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
            name: None,
        }
    }
}

// Sends each fragment to the receiver and keeps the running content.
// Breaks when the stream is finished or nobody is listening anymore.
fn forward(
    records: Vec<Result<Record>>,
    tx: &mpsc::UnboundedSender<String>,
    content: &mut String,
) -> ControlFlow<()> {
    for record in records {
        match record {
            Ok(Record::Delta(fragment)) => {
                content.push_str(&fragment);
                if tx.send(fragment).is_err() {
                    tracing::debug!("Receiver dropped, abandoning completion stream");
                    return ControlFlow::Break(());
                }
            }
            Ok(Record::Empty) => {}
            Ok(Record::Done) => return ControlFlow::Break(()),
            Err(e) => tracing::error!("Parsing completion chunk failed: {}", e),
        }
    }
    ControlFlow::Continue(())
}

/// Request a streamed completion for `messages` and send each content
/// fragment to `tx` in the order it was generated. Returns the full
/// content once the stream is done. Sampling is deterministic
/// (temperature 0).
///
/// Stops reading from the API as soon as the receiving end of `tx` is
/// closed, which drops the upstream connection.
pub async fn completion_stream(
    tx: mpsc::UnboundedSender<String>,
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, Error> {
    let payload = json!({
        "model": model,
        "messages": messages,
        "temperature": 0,
        "stream": true,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let request = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 5))
        .json(&payload)
        .send();

    // Waiting on response headers can take a while, give up early if
    // the client is already gone
    let response = tokio::select! {
        _ = tx.closed() => {
            tracing::debug!("Client went away before the completion started");
            return Ok(String::new());
        }
        response = request => response?,
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Completion request failed with status {}: {}", status, body);
    }

    let mut stream = response.bytes_stream();
    let mut decoder = EventDecoder::new();
    let mut content = String::new();

    loop {
        let chunk = tokio::select! {
            _ = tx.closed() => {
                tracing::debug!("Client went away, closing completion stream");
                return Ok(content);
            }
            chunk = stream.next() => chunk,
        };

        let Some(chunk) = chunk else {
            break;
        };
        if forward(decoder.push(&chunk?), &tx, &mut content).is_break() {
            return Ok(content);
        }
    }

    // The body ended without the sentinel
    let _ = forward(decoder.finish(), &tx, &mut content);
    if !decoder.is_done() {
        tracing::warn!("Completion stream ended without [DONE]");
    }

    Ok(content)
}
