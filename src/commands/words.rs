//! Word list summary command

use crate::core::Word;
use crate::wordlists::WordList;
use anyhow::{Context, Result};

/// Sizes of the loaded lists and an optional single-word lookup
#[derive(Debug)]
pub struct WordsSummary {
    pub answers: usize,
    pub allowed: usize,
    pub lookup: Option<WordLookup>,
}

/// Where a looked-up word appears
#[derive(Debug)]
pub struct WordLookup {
    pub word: String,
    pub allowed: bool,
    pub answer: bool,
}

/// Summarize the lists, optionally checking one word
///
/// # Errors
///
/// Returns an error if `lookup` is not a valid 5-letter word.
pub fn summarize_words(
    answers: &[Word],
    dictionary: &WordList,
    lookup: Option<&str>,
) -> Result<WordsSummary> {
    let lookup = lookup
        .map(|text| -> Result<WordLookup> {
            let word = Word::new(text).with_context(|| format!("Invalid word '{text}'"))?;
            Ok(WordLookup {
                allowed: dictionary.contains(&word),
                answer: answers.contains(&word),
                word: word.text().to_string(),
            })
        })
        .transpose()?;

    Ok(WordsSummary {
        answers: answers.len(),
        allowed: dictionary.len(),
        lookup,
    })
}
