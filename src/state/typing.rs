//! Typing headline state machine.
//!
//! Types a phrase one character per tick, holds it, deletes it one
//! character per tick, pauses, then moves to the next phrase and wraps.
//! Each tick reports the text to show and how long to wait before the next.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use serde::Deserialize;

/// Delays between ticks, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingTimings {
    /// After typing a character.
    pub type_ms: u32,
    /// After deleting a character.
    pub delete_ms: u32,
    /// After the phrase is fully typed.
    pub hold_ms: u32,
    /// After the phrase is fully deleted.
    pub gap_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self { type_ms: 100, delete_ms: 50, hold_ms: 2000, gap_ms: 500 }
    }
}

/// Output of one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingState {
    phrases: Vec<String>,
    timings: TypingTimings,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingState {
    pub fn new(phrases: Vec<String>, timings: TypingTimings) -> Self {
        Self { phrases, timings, phrase_index: 0, char_index: 0, deleting: false }
    }

    /// Advance one character and return what to render next.
    pub fn tick(&mut self) -> TypingFrame {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return TypingFrame { text: String::new(), delay_ms: self.timings.gap_ms };
        };
        let len = phrase.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.timings.delete_ms
        } else {
            self.char_index = (self.char_index + 1).min(len.max(1));
            self.timings.type_ms
        };
        let text = phrase.chars().take(self.char_index).collect::<String>();

        if !self.deleting && self.char_index >= len {
            self.deleting = true;
            delay_ms = self.timings.hold_ms;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = self.timings.gap_ms;
        }

        TypingFrame { text, delay_ms }
    }
}
