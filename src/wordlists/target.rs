//! Target word selection
//!
//! The daily target follows the classic schedule: one answer per day,
//! starting with the first answer on 2021-06-19 and wrapping around.

use crate::core::Word;
use crate::game::{ConfigError, Dictionary};
use chrono::{Datelike, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Days from CE of 2021-06-19, the first daily puzzle
const EPOCH_DAYS_FROM_CE: i32 = 737_960;

/// How the secret word for a session is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    /// The scheduled answer for a calendar day
    Daily(NaiveDate),
    /// A uniformly random answer, reproducible when seeded
    Random { seed: Option<u64> },
    /// An explicit word
    Fixed(String),
}

impl TargetSource {
    /// Parse a `--daily` argument: `today` or `YYYY-MM-DD`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDate` for anything else.
    pub fn daily_from_arg(arg: &str) -> Result<Self, ConfigError> {
        if arg.eq_ignore_ascii_case("today") {
            return Ok(Self::Daily(Local::now().date_naive()));
        }
        NaiveDate::parse_from_str(arg, "%Y-%m-%d")
            .map(Self::Daily)
            .map_err(|_| ConfigError::InvalidDate(arg.to_string()))
    }

    /// Pick the target word
    ///
    /// Daily and random targets are drawn from the answers the dictionary
    /// accepts, so the target can always be guessed.
    ///
    /// # Errors
    /// - `InvalidTarget` / `TargetNotInDictionary` for a bad fixed word
    /// - `NoTargets` if no answer is in the dictionary
    pub fn resolve<D>(&self, answers: &[Word], dictionary: &D) -> Result<Word, ConfigError>
    where
        D: Dictionary + ?Sized,
    {
        if let Self::Fixed(text) = self {
            let word =
                Word::new(text.as_str()).map_err(|_| ConfigError::InvalidTarget(text.clone()))?;
            if !dictionary.is_valid_word(&word) {
                return Err(ConfigError::TargetNotInDictionary(word.text().to_string()));
            }
            return Ok(word);
        }

        let pool: Vec<&Word> = answers
            .iter()
            .filter(|word| dictionary.is_valid_word(word))
            .collect();
        if pool.is_empty() {
            return Err(ConfigError::NoTargets);
        }

        let index = match self {
            Self::Daily(date) => daily_index(*date, pool.len()),
            Self::Random { seed: Some(seed) } => {
                StdRng::seed_from_u64(*seed).random_range(0..pool.len())
            }
            Self::Random { seed: None } => rand::rng().random_range(0..pool.len()),
            Self::Fixed(_) => unreachable!("handled above"),
        };

        Ok(pool[index].clone())
    }
}

/// Index of the scheduled answer for `date` in a list of `len` answers
///
/// Dates before the first puzzle wrap backwards from the end of the list.
///
/// # Panics
/// Panics if `len` is 0.
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    assert!(len > 0, "answer list must not be empty");
    let days = i64::from(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE);
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    days.rem_euclid(len) as usize
}
