//! Wordle Clone
//!
//! A terminal Wordle: type a five-letter guess, get coloured feedback, and
//! find the hidden word before the guesses run out.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::{Feedback, LetterClass, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("erase").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.class_at(0), LetterClass::PresentElsewhere);
//! assert_eq!(feedback.class_at(4), LetterClass::Absent);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Input collection and turn state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// File-backed tracing setup
pub mod logging;
