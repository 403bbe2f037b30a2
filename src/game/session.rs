//! Game session: the turn state machine
//!
//! A session owns the secret target, the pending input, every accepted guess
//! and the cumulative keyboard state. Presentation layers drive it through
//! three commands: [`GameSession::append_letter`],
//! [`GameSession::remove_last_letter`] and [`GameSession::submit_guess`].

use super::config::GameConfig;
use super::dictionary::Dictionary;
use super::input::InputBuffer;
use crate::core::{Feedback, KeyboardState, Word};
use thiserror::Error;
use tracing::{debug, info};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Letters can be typed and guesses submitted
    AcceptingInput,
    /// The target was guessed
    Won,
    /// The guess limit was reached without finding the target
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a command was rejected
///
/// Every variant except `GameOver` is recoverable and leaves the session
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough letters ({len}/5)")]
    Incomplete { len: usize },
    #[error("Not in word list: {}", .0.text().to_uppercase())]
    NotInDictionary(Word),
    #[error("Already guessed {}", .0.text().to_uppercase())]
    AlreadyGuessed(Word),
    #[error("The game is over")]
    GameOver,
}

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub record: GuessRecord,
    /// 1-based number of this guess
    pub guess_number: usize,
    /// Status after the guess was applied
    pub status: GameStatus,
}

/// A single game against one target word
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    config: GameConfig,
    buffer: InputBuffer,
    history: Vec<GuessRecord>,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl GameSession {
    /// Start a session with an empty buffer and no guesses
    #[must_use]
    pub fn new(target: Word, config: GameConfig) -> Self {
        debug!(
            target_word = %target,
            max_guesses = config.max_guesses(),
            "session started"
        );

        Self {
            target,
            config,
            buffer: InputBuffer::new(),
            history: Vec::new(),
            keyboard: KeyboardState::new(),
            status: GameStatus::AcceptingInput,
        }
    }

    /// Type a letter into the pending guess
    ///
    /// Returns `Ok(false)` when the letter was ignored (buffer full or not a letter).
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the session has ended.
    pub fn append_letter(&mut self, ch: char) -> Result<bool, GameError> {
        self.ensure_accepting()?;
        Ok(self.buffer.append_letter(ch))
    }

    /// Delete the last typed letter
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the session has ended.
    pub fn remove_last_letter(&mut self) -> Result<Option<char>, GameError> {
        self.ensure_accepting()?;
        Ok(self.buffer.remove_last_letter())
    }

    /// Submit the pending guess
    ///
    /// On success the guess is evaluated, the keyboard updated, the record
    /// appended and the buffer cleared.
    ///
    /// # Errors
    /// - `Incomplete` if fewer than five letters are buffered
    /// - `NotInDictionary` if `dictionary` rejects the word
    /// - `AlreadyGuessed` if the word was submitted before
    /// - `GameOver` if the session has ended
    pub fn submit_guess<D>(&mut self, dictionary: &D) -> Result<TurnOutcome, GameError>
    where
        D: Dictionary + ?Sized,
    {
        let result = self.check_submission(dictionary);
        match result {
            Ok(guess) => Ok(self.apply_guess(guess)),
            Err(err) => {
                debug!(reason = %err, buffer = self.buffer.current(), "guess rejected");
                Err(err)
            }
        }
    }

    fn check_submission<D>(&self, dictionary: &D) -> Result<Word, GameError>
    where
        D: Dictionary + ?Sized,
    {
        self.ensure_accepting()?;

        let len = self.buffer.len();
        if !self.buffer.is_full() {
            return Err(GameError::Incomplete { len });
        }
        let guess = self
            .buffer
            .to_word()
            .map_err(|_| GameError::Incomplete { len })?;

        if !dictionary.is_valid_word(&guess) {
            return Err(GameError::NotInDictionary(guess));
        }
        if self.has_guessed(&guess) {
            return Err(GameError::AlreadyGuessed(guess));
        }

        Ok(guess)
    }

    fn apply_guess(&mut self, guess: Word) -> TurnOutcome {
        let feedback = Feedback::evaluate(&guess, &self.target);
        self.keyboard.record(&guess, &feedback);
        self.buffer.reset();

        let record = GuessRecord {
            word: guess,
            feedback,
        };
        self.history.push(record.clone());
        let guess_number = self.history.len();

        self.status = if feedback.is_perfect() {
            GameStatus::Won
        } else if guess_number >= self.config.max_guesses() {
            GameStatus::Lost
        } else {
            GameStatus::AcceptingInput
        };

        debug!(
            guess = %record.word,
            feedback = %feedback,
            code = feedback.value(),
            guess_number,
            "guess accepted"
        );
        match self.status {
            GameStatus::Won => info!(guesses = guess_number, "game won"),
            GameStatus::Lost => info!(target_word = %self.target, "game lost"),
            GameStatus::AcceptingInput => {}
        }

        TurnOutcome {
            record,
            guess_number,
            status: self.status,
        }
    }

    fn ensure_accepting(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret word
    ///
    /// Presentation layers should only show it once the game is over;
    /// see [`GameSession::revealed_target`].
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// The target, once the session has ended
    #[must_use]
    pub const fn revealed_target(&self) -> Option<&Word> {
        if self.status.is_terminal() {
            Some(&self.target)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config.max_guesses().saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.history.iter().any(|record| record.word == *word)
    }

    /// Spoiler-free result block, available once the game has ended
    ///
    /// ```text
    /// Wordle 3/6
    ///
    /// ⬜🟨⬜⬜🟩
    /// 🟩⬜🟩🟨🟩
    /// 🟩🟩🟩🟩🟩
    /// ```
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let score = match self.status {
            GameStatus::Won => self.history.len().to_string(),
            GameStatus::Lost => "X".to_string(),
            GameStatus::AcceptingInput => return None,
        };

        let mut text = format!("Wordle {score}/{}\n", self.config.max_guesses());
        for record in &self.history {
            text.push('\n');
            text.push_str(&record.feedback.to_emoji());
        }
        Some(text)
    }
}
