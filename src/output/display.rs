//! Display functions for command results

use super::formatters::{colored_guess, colored_keyboard, create_progress_bar};
use crate::commands::{CheckResult, WordsSummary};
use crate::game::{GameSession, GameStatus, Statistics};
use colored::Colorize;

/// Print the result of checking one guess against a target
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} → {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_guess(&result.guess, result.feedback));
    println!("  {}", result.feedback.to_emoji());
    println!("  {}", result.feedback);

    if !result.guess_in_dictionary {
        println!(
            "\n{}",
            format!(
                "⚠ {} is not in the dictionary; the game would reject it",
                result.guess.text().to_uppercase()
            )
            .yellow()
        );
    }
}

/// Print a summary of the loaded word lists
pub fn print_words_summary(summary: &WordsSummary) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORD LISTS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n   Target words:   {}", summary.answers);
    println!("   Allowed words:  {}", summary.allowed);

    if let Some(lookup) = &summary.lookup {
        let mark = |present: bool| {
            if present {
                "yes".green().bold()
            } else {
                "no".red().bold()
            }
        };
        println!(
            "\n   {}",
            lookup.word.to_uppercase().bright_yellow().bold()
        );
        println!("     Accepted as a guess: {}", mark(lookup.allowed));
        println!("     Possible target:     {}", mark(lookup.answer));
    }
}

/// Print the board and keyboard of a session in progress
pub fn print_board(session: &GameSession) {
    println!();
    for record in session.history() {
        println!("  {}", colored_guess(record.word(), record.feedback()));
    }
    println!();
    for row in colored_keyboard(session.keyboard()) {
        println!("  {row}");
    }
    println!();
}

/// Print the end-of-game banner and share text
pub fn print_game_over(session: &GameSession) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            let turns = session.guesses_made();
            println!(
                "{}",
                "    🎉  W O R D L E   S O L V E D !  🎉".bright_green().bold()
            );
            println!(
                "\n  Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!("{}", "    Out of guesses!".bright_red().bold());
        }
        GameStatus::AcceptingInput => {}
    }

    if let Some(target) = session.revealed_target() {
        println!(
            "  The word was {}",
            target.text().to_uppercase().bright_yellow().bold()
        );
    }
    if let Some(share) = session.share_text() {
        println!("\n{share}");
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print win rate, streaks and the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:         {}", stats.total_games);
    println!("   Win rate:       {:.0}%", stats.win_rate());
    println!("   Current streak: {}", stats.current_streak);
    println!("   Max streak:     {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}
