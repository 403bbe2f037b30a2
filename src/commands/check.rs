//! Guess checking command
//!
//! Evaluates one guess against a chosen target without starting a game.

use crate::core::{Feedback, Word};
use crate::game::Dictionary;
use anyhow::{Context, Result};

/// Result of checking a guess
#[derive(Debug)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
    pub guess_in_dictionary: bool,
}

/// Evaluate `guess` against `target`
///
/// Dictionary membership is reported, not enforced.
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn check_guess<D>(guess: &str, target: &str, dictionary: &D) -> Result<CheckResult>
where
    D: Dictionary + ?Sized,
{
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;

    let feedback = Feedback::evaluate(&guess, &target);
    let guess_in_dictionary = dictionary.is_valid_word(&guess);

    Ok(CheckResult {
        guess,
        target,
        feedback,
        guess_in_dictionary,
    })
}
