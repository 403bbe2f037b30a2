//! Game flow: input collection and the turn state machine
//!
//! ```rust
//! use wordle_clone::core::Word;
//! use wordle_clone::game::{GameConfig, GameSession, GameStatus};
//!
//! let mut game = GameSession::new(Word::new("crane").unwrap(), GameConfig::default());
//! for ch in "crane".chars() {
//!     game.append_letter(ch).unwrap();
//! }
//!
//! let accept_all = |_: &Word| true;
//! let outcome = game.submit_guess(&accept_all).unwrap();
//! assert_eq!(outcome.status, GameStatus::Won);
//! ```

mod config;
mod dictionary;
mod input;
mod session;
mod stats;

pub use config::{ConfigError, DEFAULT_MAX_GUESSES, GameConfig, MAX_GUESS_LIMIT};
pub use dictionary::Dictionary;
pub use input::InputBuffer;
pub use session::{GameError, GameSession, GameStatus, GuessRecord, TurnOutcome};
pub use stats::Statistics;
