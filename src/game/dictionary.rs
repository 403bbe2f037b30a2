//! Dictionary membership check consumed by the game session

use crate::core::Word;

/// Decides whether a word is an acceptable guess
pub trait Dictionary {
    fn is_valid_word(&self, word: &Word) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&Word) -> bool,
{
    fn is_valid_word(&self, word: &Word) -> bool {
        self(word)
    }
}
