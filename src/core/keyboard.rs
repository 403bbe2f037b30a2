//! Cumulative keyboard key state
//!
//! Tracks the strongest classification seen for each letter across all
//! guesses of a session. A key only ever moves up:
//! unknown → Absent → `PresentElsewhere` → Correct.

use super::feedback::{Feedback, LetterClass};
use super::word::Word;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-seen classification per letter `a`-`z`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<LetterClass>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the key state
    ///
    /// Each letter keeps the maximum of its current and new classification.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &class) in guess.chars().iter().zip(feedback.classes()) {
            let slot = &mut self.keys[usize::from(letter - b'a')];
            *slot = Some(slot.map_or(class, |current| current.max(class)));
        }
    }

    /// State of a letter, or `None` if it has not been guessed yet
    ///
    /// Case-insensitive; non-letters always return `None`.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterClass> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.keys[letter as usize - 'a' as usize]
        } else {
            None
        }
    }

    /// Iterate over `(letter, state)` for `a` through `z`
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<LetterClass>)> + '_ {
        ('a'..='z').zip(self.keys.iter().copied())
    }

    /// Number of letters with any recorded state
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.keys.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClass::{Absent, Correct, PresentElsewhere};
    use proptest::prelude::*;

    fn record(keyboard: &mut KeyboardState, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let feedback = Feedback::evaluate(&guess, &target);
        keyboard.record(&guess, &feedback);
    }

    #[test]
    fn fresh_keyboard_is_unknown() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.known_count(), 0);
        assert!(keyboard.iter().all(|(_, state)| state.is_none()));
    }

    #[test]
    fn record_marks_each_guessed_letter() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "trace", "crane");

        assert_eq!(keyboard.get('t'), Some(Absent));
        assert_eq!(keyboard.get('r'), Some(Correct));
        assert_eq!(keyboard.get('c'), Some(PresentElsewhere));
        assert_eq!(keyboard.get('E'), Some(Correct));
        assert_eq!(keyboard.get('z'), None);
        assert_eq!(keyboard.known_count(), 5);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "crane", "crane");
        // C is elsewhere in this guess, but was already correct
        record(&mut keyboard, "occur", "crane");

        assert_eq!(keyboard.get('c'), Some(Correct));
        assert_eq!(keyboard.get('r'), Some(Correct));
        assert_eq!(keyboard.get('o'), Some(Absent));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "trace", "crane");
        assert_eq!(keyboard.get('c'), Some(PresentElsewhere));

        record(&mut keyboard, "clash", "crane");
        assert_eq!(keyboard.get('c'), Some(Correct));
    }

    #[test]
    fn duplicate_letter_in_one_guess_keeps_best_position() {
        let mut keyboard = KeyboardState::new();
        // First E absent, last E correct: the key shows correct
        record(&mut keyboard, "eerie", "crane");
        assert_eq!(keyboard.get('e'), Some(Correct));
    }

    #[test]
    fn recording_same_guess_twice_is_idempotent() {
        let mut once = KeyboardState::new();
        record(&mut once, "speed", "erase");

        let mut twice = once.clone();
        record(&mut twice, "speed", "erase");

        assert_eq!(once, twice);
    }

    #[test]
    fn non_letters_have_no_state() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.get('1'), None);
        assert_eq!(keyboard.get('é'), None);
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn keys_never_downgrade(
            target in "[a-h]{5}",
            guesses in proptest::collection::vec("[a-h]{5}", 1..8),
        ) {
            let target = Word::new(&target).unwrap();
            let mut keyboard = KeyboardState::new();
            for guess in &guesses {
                let before = keyboard.clone();
                let guess = Word::new(guess).unwrap();
                keyboard.record(&guess, &Feedback::evaluate(&guess, &target));

                for ((_, old), (_, new)) in before.iter().zip(keyboard.iter()) {
                    if let Some(old) = old {
                        prop_assert!(new.is_some_and(|new| new >= old));
                    }
                }
            }
        }
    }
}
