//! Decoder for the event stream returned by the chat completions API
//! when `stream` is enabled. Each line looks like `data: {...}` and
//! the stream ends with `data: [DONE]`.
//!
//! Network chunks don't line up with lines so the decoder holds on to
//! a trailing partial line until the rest of it arrives.

use anyhow::{Result, anyhow};
use serde::Deserialize;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    delta: ChunkDelta,
}

#[derive(Debug, Deserialize)]
struct CompletionChunk {
    choices: Vec<ChunkChoice>,
}

/// A single decoded line of the event stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Newly generated text
    Delta(String),
    /// A well formed record without any content, e.g. the first chunk
    /// that only carries the role or the last one with a finish reason
    Empty,
    /// The `[DONE]` sentinel
    Done,
}

/// Parse one non-empty line, with or without the `data: ` prefix.
pub fn parse_record(line: &str) -> Result<Record> {
    let data = line.strip_prefix(DATA_PREFIX).unwrap_or(line);

    if data == DONE_SENTINEL {
        return Ok(Record::Done);
    }

    let chunk = serde_json::from_str::<CompletionChunk>(data)?;
    let choice = chunk
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Completion chunk has no choices: {}", data))?;

    Ok(match choice.delta.content {
        Some(content) => Record::Delta(content),
        None => Record::Empty,
    })
}

#[derive(Debug, Default)]
pub struct EventDecoder {
    buffer: Vec<u8>,
    done: bool,
}

impl EventDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the `[DONE]` sentinel has been decoded. Anything fed
    /// to the decoder after that is ignored.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feed the next network chunk and decode every complete line in
    /// it. Errors are per record so one bad line doesn't lose the
    /// rest of the chunk.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Result<Record>> {
        if self.done {
            return Vec::new();
        }
        self.buffer.extend_from_slice(chunk);

        let mut records = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            if self.decode_line(&line[..newline], &mut records) {
                break;
            }
        }
        records
    }

    /// Decode whatever is left once the body has ended. A well formed
    /// stream always ends with a newline so this is usually empty.
    pub fn finish(&mut self) -> Vec<Result<Record>> {
        let mut records = Vec::new();
        if !self.done && !self.buffer.is_empty() {
            let line = std::mem::take(&mut self.buffer);
            self.decode_line(&line, &mut records);
        }
        records
    }

    // Returns true when decoding must stop
    fn decode_line(&mut self, line: &[u8], records: &mut Vec<Result<Record>>) -> bool {
        let line = match std::str::from_utf8(line) {
            Ok(line) => line,
            Err(e) => {
                records.push(Err(e.into()));
                return false;
            }
        };
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return false;
        }

        let record = parse_record(line);
        if let Ok(Record::Done) = record {
            self.done = true;
            self.buffer.clear();
            records.push(record);
            return true;
        }
        records.push(record);
        false
    }
}
