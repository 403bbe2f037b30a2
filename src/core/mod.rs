//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words, guess
//! evaluation and keyboard state. Everything here is pure and deterministic.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterClass};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use word::{WORD_LENGTH, Word, WordError};
