//! Guess evaluation and per-letter feedback
//!
//! A [`Feedback`] holds one [`LetterClass`] per position of a guess. It can
//! also be packed into a single base-3 value:
//! - 0 = Absent (letter not in word)
//! - 1 = `PresentElsewhere` (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! where each position contributes digit × 3^position (0-242).

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Verdict for a single letter of a guess
///
/// Ordered by strength: `Absent < PresentElsewhere < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterClass {
    Absent,
    PresentElsewhere,
    Correct,
}

impl LetterClass {
    /// Square emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::PresentElsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// ASCII symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::PresentElsewhere => 'Y',
            Self::Absent => '-',
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::PresentElsewhere => 1,
            Self::Correct => 2,
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::PresentElsewhere),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess: a classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterClass; WORD_LENGTH]);

impl Feedback {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([LetterClass::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against the secret `target`
    ///
    /// Implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact matches and remove them from the pool
    /// 3. Second pass: mark wrong-position letters while the pool has copies left
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, LetterClass::*, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    ///
    /// // Only two E's in ERASE, so at most two marks for E
    /// assert_eq!(
    ///     Feedback::evaluate(&guess, &target).classes(),
    ///     &[PresentElsewhere, Absent, PresentElsewhere, PresentElsewhere, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterClass::Absent; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = LetterClass::Correct;

                if let Some(count) = target_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterClass::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterClass::PresentElsewhere;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Evaluate two raw strings
    ///
    /// # Panics
    /// Panics if either input is not a 5-letter lowercase ASCII word.
    /// Callers are expected to validate input first.
    #[must_use]
    pub fn evaluate_str(guess: &str, target: &str) -> Self {
        assert!(
            is_well_formed(guess),
            "guess must be 5 lowercase letters, got {guess:?}"
        );
        assert!(
            is_well_formed(target),
            "target must be 5 lowercase letters, got {target:?}"
        );

        match (Word::new(guess), Word::new(target)) {
            (Ok(guess), Ok(target)) => Self::evaluate(&guess, &target),
            _ => unreachable!("inputs validated above"),
        }
    }

    /// Classifications in position order
    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[LetterClass; WORD_LENGTH] {
        &self.0
    }

    /// Classification at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn class_at(&self, position: usize) -> LetterClass {
        self.0[position]
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count positions marked correct
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0
            .iter()
            .filter(|&&class| class == LetterClass::Correct)
            .count()
    }

    /// Count positions marked present elsewhere
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0
            .iter()
            .filter(|&&class| class == LetterClass::PresentElsewhere)
            .count()
    }

    /// Pack into a base-3 value (0-242)
    #[must_use]
    pub fn value(self) -> u8 {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for class in self.0 {
            value += class.digit() * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        value
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present elsewhere
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for callers; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut classes = [LetterClass::Absent; WORD_LENGTH];
        for (slot, ch) in classes.iter_mut().zip(chars) {
            *slot = LetterClass::from_char(ch)?;
        }

        Some(Self(classes))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|class| class.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in self.0 {
            write!(f, "{}", class.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

fn is_well_formed(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}
