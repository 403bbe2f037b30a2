//! Wordle Clone - CLI
//!
//! Play Wordle in a TUI or a plain line-based mode, or check feedback for a
//! single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_clone::{
    commands::{check_guess, run_simple, summarize_words},
    core::Word,
    game::{DEFAULT_MAX_GUESSES, GameConfig, GameSession},
    logging::init_logging,
    output::{print_check_result, print_words_summary},
    wordlists::{ALLOWED, ANSWERS, TargetSource, WordList, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Play a specific target word
    #[arg(short, long, global = true, conflicts_with = "daily")]
    target: Option<String>,

    /// Play the daily word: `--daily` for today or `--daily=YYYY-MM-DD`
    #[arg(
        short,
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "today"
    )]
    daily: Option<String>,

    /// Dictionary: 'all' (default), 'answers' (answers only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    dictionary: String,

    /// Seed for reproducible random targets
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Append tracing output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Summarize the word lists, optionally looking up one word
    Words {
        /// Word to look up
        word: Option<String>,
    },
}

/// Load word lists based on the -w flag
///
/// Returns (`dictionary`, `answers`)
/// - "all": every allowed guess is accepted, targets come from the answers
/// - "answers": only answers are accepted as guesses
/// - "<path>": custom dictionary file, targets from the answers it contains
fn load_wordlists(dictionary_mode: &str) -> Result<(WordList, Vec<Word>)> {
    let answers = words_from_slice(ANSWERS);

    let dictionary = match dictionary_mode {
        "all" => WordList::from_slice(ALLOWED),
        "answers" => answers.iter().cloned().collect(),
        path => WordList::from_file(path)
            .with_context(|| format!("Failed to load dictionary from '{path}'"))?,
    };

    Ok((dictionary, answers))
}

fn target_source(cli: &Cli) -> Result<TargetSource> {
    if let Some(word) = &cli.target {
        return Ok(TargetSource::Fixed(word.clone()));
    }
    if let Some(date) = &cli.daily {
        return Ok(TargetSource::daily_from_arg(date)?);
    }
    Ok(TargetSource::Random { seed: cli.seed })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let (dictionary, answers) = load_wordlists(&cli.dictionary)?;
    tracing::debug!(
        dictionary = dictionary.len(),
        answers = answers.len(),
        "word lists loaded"
    );

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => {
            use wordle_clone::interactive::{App, run_tui};

            let (target, config) = prepare_game(&cli, &dictionary, &answers)?;
            let app = App::new(GameSession::new(target, config), &dictionary, &answers);
            run_tui(app)
        }
        Commands::Simple => {
            let (target, config) = prepare_game(&cli, &dictionary, &answers)?;
            run_simple(&dictionary, &answers, target, config)
        }
        Commands::Check { guess, target } => {
            let result = check_guess(guess, target, &dictionary)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Words { word } => {
            let summary = summarize_words(&answers, &dictionary, word.as_deref())?;
            print_words_summary(&summary);
            Ok(())
        }
    }
}

fn prepare_game(cli: &Cli, dictionary: &WordList, answers: &[Word]) -> Result<(Word, GameConfig)> {
    let config = GameConfig::new(cli.max_guesses)?;
    let target = target_source(cli)?.resolve(answers, dictionary)?;
    Ok((target, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_daily_flag_means_today() {
        let cli = Cli::try_parse_from(["wordle_clone", "--daily", "simple"]).unwrap();
        assert_eq!(cli.daily.as_deref(), Some("today"));
        assert!(matches!(cli.command, Some(Commands::Simple)));
    }

    #[test]
    fn daily_date_needs_equals() {
        let cli = Cli::try_parse_from(["wordle_clone", "--daily=2022-01-01", "simple"]).unwrap();
        assert_eq!(cli.daily.as_deref(), Some("2022-01-01"));
        assert!(matches!(cli.command, Some(Commands::Simple)));
    }

    #[test]
    fn oversized_guess_limit_is_an_error() {
        let cli = Cli::try_parse_from(["wordle_clone", "-g", "18446744073709551615", "simple"])
            .unwrap();
        let (dictionary, answers) = load_wordlists("all").unwrap();
        assert!(prepare_game(&cli, &dictionary, &answers).is_err());
    }
}
