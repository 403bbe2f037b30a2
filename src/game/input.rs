//! Pending-guess input buffer

use crate::core::{WORD_LENGTH, Word, WordError};

/// Ordered buffer of up to five typed letters
///
/// Only ASCII letters are accepted and they are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    letters: String,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: String::with_capacity(WORD_LENGTH),
        }
    }

    /// Append a letter if there is room
    ///
    /// Returns `false` (and leaves the buffer untouched) when the buffer is
    /// full or `ch` is not an ASCII letter.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.is_full() || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(ch.to_ascii_lowercase());
        true
    }

    /// Remove and return the last letter, if any
    pub fn remove_last_letter(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn reset(&mut self) {
        self.letters.clear();
    }

    /// Letters typed so far
    #[inline]
    #[must_use]
    pub fn current(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= WORD_LENGTH
    }

    /// Convert a full buffer into a word
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if fewer than five letters are buffered.
    pub fn to_word(&self) -> Result<Word, WordError> {
        Word::new(self.letters.as_str())
    }
}
