//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, file loading for
//! custom dictionaries, and target word selection.

mod embedded;
pub mod loader;
pub mod target;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::WordList;
pub use target::TargetSource;
