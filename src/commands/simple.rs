//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is typed into the session
//! letter by letter and then submitted.

use crate::core::{WORD_LENGTH, Word};
use crate::game::{Dictionary, GameConfig, GameError, GameSession, Statistics, TurnOutcome};
use crate::output::formatters::colored_guess;
use crate::output::{print_board, print_game_over, print_statistics};
use crate::wordlists::TargetSource;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// target word can be chosen for a new game.
pub fn run_simple<D>(
    dictionary: &D,
    answers: &[Word],
    target: Word,
    config: GameConfig,
) -> Result<()>
where
    D: Dictionary + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the hidden {WORD_LENGTH}-letter word in {} tries.",
        config.max_guesses()
    );
    println!("After each guess the tiles show how close you were:\n");
    println!("  - Green: right letter, right spot");
    println!("  - Yellow: letter is in the word, wrong spot");
    println!("  - Gray: letter is not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new word, 'keys' to show the keyboard\n");

    let mut session = GameSession::new(target, config);
    let mut stats = Statistics::new(config.max_guesses());

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.guesses_made() + 1,
            config.max_guesses()
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = next_session(dictionary, answers, config)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "keys" | "k" => {
                print_board(&session);
                continue;
            }
            _ => {}
        }

        if input.chars().count() > WORD_LENGTH {
            println!("❌ Too many letters (max {WORD_LENGTH})\n");
            continue;
        }

        match submit_line(&mut session, &input, dictionary) {
            Ok(outcome) => {
                println!(
                    "   {}\n",
                    colored_guess(outcome.record.word(), outcome.record.feedback())
                );

                if outcome.status.is_terminal() {
                    stats.record(&session);
                    print_game_over(&session);
                    print_statistics(&stats);

                    match get_user_input("\nPlay again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session = next_session(dictionary, answers, config)?;
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
            Err(err) => println!("❌ {err}\n"),
        }
    }
}

/// Replace the pending input with `line` and submit it
///
/// Characters that are not letters are skipped, so the submission may come
/// up short and be rejected as incomplete.
pub(crate) fn submit_line<D>(
    session: &mut GameSession,
    line: &str,
    dictionary: &D,
) -> Result<TurnOutcome, GameError>
where
    D: Dictionary + ?Sized,
{
    while session.remove_last_letter()?.is_some() {}
    for ch in line.chars() {
        session.append_letter(ch)?;
    }
    session.submit_guess(dictionary)
}

fn next_session<D>(dictionary: &D, answers: &[Word], config: GameConfig) -> Result<GameSession>
where
    D: Dictionary + ?Sized,
{
    let target = TargetSource::Random { seed: None }.resolve(answers, dictionary)?;
    Ok(GameSession::new(target, config))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("Input closed");
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::wordlists::{ALLOWED, WordList};

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap(), GameConfig::default())
    }

    #[test]
    fn submit_line_plays_a_word() {
        let dictionary = WordList::from_slice(ALLOWED);
        let mut game = session("crane");

        let outcome = submit_line(&mut game, "trace", &dictionary).unwrap();
        assert_eq!(outcome.record.word().text(), "trace");
        assert_eq!(outcome.status, GameStatus::AcceptingInput);

        let outcome = submit_line(&mut game, "crane", &dictionary).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
    }

    #[test]
    fn submit_line_replaces_leftover_input() {
        let dictionary = WordList::from_slice(ALLOWED);
        let mut game = session("crane");

        assert!(matches!(
            submit_line(&mut game, "xxxxx", &dictionary),
            Err(GameError::NotInDictionary(_))
        ));
        // The rejected word is still buffered; the next line replaces it
        let outcome = submit_line(&mut game, "slate", &dictionary).unwrap();
        assert_eq!(outcome.record.word().text(), "slate");
    }

    #[test]
    fn submit_line_short_word_is_incomplete() {
        let dictionary = WordList::from_slice(ALLOWED);
        let mut game = session("crane");

        assert_eq!(
            submit_line(&mut game, "cr4ne", &dictionary),
            Err(GameError::Incomplete { len: 4 })
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn next_session_picks_a_playable_target() {
        let dictionary = WordList::from_slice(&["crane"]);
        let answers = crate::wordlists::loader::words_from_slice(&["crane", "xxxxx"]);

        let game = next_session(&dictionary, &answers, GameConfig::default()).unwrap();
        assert_eq!(game.target().text(), "crane");
    }
}
