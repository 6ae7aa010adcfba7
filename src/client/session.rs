//! Conversation state on the consuming side of the bot endpoint.
//!
//! Each bot reply goes `Idle -> Streaming -> Idle`. While streaming,
//! fragments are appended to a single slot at the end of the message
//! list which is created by the first fragment of the reply.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Idle,
    Streaming { slot: Option<usize> },
}

#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<String>,
    state: ReplyState,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            state: ReplyState::Idle,
        }
    }

    /// Every rendered turn, oldest first, bot replies included
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn state(&self) -> ReplyState {
        self.state
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self.state, ReplyState::Streaming { .. })
    }

    /// Whether the send button would be enabled for `draft`
    pub fn can_send(&self, draft: &str) -> bool {
        !self.is_streaming() && !draft.trim().is_empty()
    }

    /// Start waiting for a bot reply and return the history to send
    /// with the request. Used directly on load to get the opening
    /// reply. Returns `None` if a reply is already streaming.
    pub fn begin_reply(&mut self) -> Option<Vec<String>> {
        if self.is_streaming() {
            return None;
        }
        self.state = ReplyState::Streaming { slot: None };
        Some(self.messages.clone())
    }

    /// Add the visitor's turn and start waiting for the reply. Does
    /// nothing while a reply is streaming or when the draft is blank.
    pub fn submit(&mut self, draft: &str) -> Option<Vec<String>> {
        if !self.can_send(draft) {
            return None;
        }
        self.messages.push(draft.trim().to_string());
        self.begin_reply()
    }

    pub fn append(&mut self, fragment: &str) {
        match self.state {
            ReplyState::Streaming { slot: Some(idx) } => self.messages[idx].push_str(fragment),
            ReplyState::Streaming { slot: None } => {
                self.messages.push(fragment.to_string());
                self.state = ReplyState::Streaming {
                    slot: Some(self.messages.len() - 1),
                };
            }
            ReplyState::Idle => {
                tracing::warn!("Dropping fragment received outside of a reply");
            }
        }
    }

    /// Finalize the streaming reply and return its text. A reply that
    /// never produced a fragment still takes a slot so turns keep
    /// alternating between bot and visitor.
    pub fn finish(&mut self) -> Option<&str> {
        let slot = match self.state {
            ReplyState::Idle => return None,
            ReplyState::Streaming { slot: Some(idx) } => idx,
            ReplyState::Streaming { slot: None } => {
                self.messages.push(String::new());
                self.messages.len() - 1
            }
        };
        self.state = ReplyState::Idle;
        self.messages.get(slot).map(String::as_str)
    }
}
