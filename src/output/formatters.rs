//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyboardState, LetterClass, Word};
use colored::{ColoredString, Colorize};

/// A single letter tile, coloured by its classification
#[must_use]
pub fn colored_tile(letter: char, class: Option<LetterClass>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match class {
        Some(LetterClass::Correct) => tile.black().on_green().bold(),
        Some(LetterClass::PresentElsewhere) => tile.black().on_yellow().bold(),
        Some(LetterClass::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A submitted guess as a row of coloured tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.classes())
        .map(|(letter, &class)| colored_tile(letter, Some(class)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The on-screen keyboard, one string per row, indented like a real keyboard
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|letter| colored_tile(letter, keyboard.get(letter)).to_string())
                .collect();
            format!("{}{}", "  ".repeat(indent), keys.join(""))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
