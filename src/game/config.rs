//! Game policy configuration

use thiserror::Error;

/// Classic Wordle guess limit
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Largest accepted guess limit
pub const MAX_GUESS_LIMIT: usize = 20;

/// Policy knobs for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_guesses: usize,
}

/// Errors raised while setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max guesses must be at least 1")]
    ZeroMaxGuesses,
    #[error("max guesses must be at most 20, got {0}")]
    TooManyGuesses(usize),
    #[error("target '{0}' is not a valid 5-letter word")]
    InvalidTarget(String),
    #[error("target '{0}' is not in the dictionary")]
    TargetNotInDictionary(String),
    #[error("no target words are available in the dictionary")]
    NoTargets,
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl GameConfig {
    /// # Errors
    /// - `ZeroMaxGuesses` if `max_guesses` is 0
    /// - `TooManyGuesses` if it exceeds [`MAX_GUESS_LIMIT`]
    pub const fn new(max_guesses: usize) -> Result<Self, ConfigError> {
        if max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }
        if max_guesses > MAX_GUESS_LIMIT {
            return Err(ConfigError::TooManyGuesses(max_guesses));
        }
        Ok(Self { max_guesses })
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}
