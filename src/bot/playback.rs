//! Word by word playback of a fixed message, used for the opening
//! reply so it looks typed out without asking the completion API.

use std::collections::VecDeque;

/// How each chunk relates to the ones before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Every chunk is all the words revealed so far and replaces the
    /// previously rendered text
    Cumulative,
    /// Every chunk is only the newly revealed word and gets appended
    /// to the previously rendered text
    Incremental,
}

/// Lazy, finite sequence of chunks over the space separated words of
/// a message. Once exhausted it stays exhausted.
#[derive(Debug)]
pub struct Playback {
    words: VecDeque<String>,
    revealed: String,
    reveal: Reveal,
}

impl Playback {
    pub fn new(text: &str, reveal: Reveal) -> Self {
        Self {
            words: text.split(' ').map(String::from).collect(),
            revealed: String::with_capacity(text.len()),
            reveal,
        }
    }
}

impl Iterator for Playback {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.words.pop_front()?;

        match self.reveal {
            Reveal::Cumulative => {
                if !self.revealed.is_empty() {
                    self.revealed.push(' ');
                }
                self.revealed.push_str(&word);
                Some(self.revealed.clone())
            }
            // The separating space trails every word but the last so
            // the chunks concatenate back into the original text
            Reveal::Incremental if self.words.is_empty() => Some(word),
            Reveal::Incremental => Some(word + " "),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.words.len(), Some(self.words.len()))
    }
}

impl ExactSizeIterator for Playback {}
