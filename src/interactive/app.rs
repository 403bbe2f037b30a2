//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameError, GameSession, GameStatus, Statistics};
use crate::wordlists::{TargetSource, WordList};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession,
    pub dictionary: &'a WordList,
    pub answers: &'a [Word],
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: GameSession, dictionary: &'a WordList, answers: &'a [Word]) -> Self {
        let stats = Statistics::new(session.config().max_guesses());

        Self {
            session,
            dictionary,
            answers,
            messages: vec![
                Message {
                    text: "Welcome! Type a word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Backspace deletes, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            should_quit: false,
        }
    }

    /// Map one key event to a game command
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.status().is_terminal() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace | KeyCode::Delete => {
                let result = self.session.remove_last_letter().map(|_| ());
                self.report(result);
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let result = self.session.append_letter(c).map(|_| ());
                self.report(result);
            }
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess(self.dictionary) {
            Ok(outcome) => match outcome.status {
                GameStatus::Won => {
                    self.stats.record(&self.session);

                    let celebration = match outcome.guess_number {
                        1 => "🎯 Genius! First try! 🌟",
                        2 => "🔥 Magnificent! 🔥",
                        3 => "✨ Impressive! ✨",
                        4 => "👏 Splendid! 👏",
                        5 => "🎉 Great! 🎉",
                        _ => "😅 Phew! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                GameStatus::Lost => {
                    self.stats.record(&self.session);

                    let target = self.session.target().text().to_uppercase();
                    self.add_message(&format!("The word was {target}"), MessageStyle::Error);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                GameStatus::AcceptingInput => {}
            },
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        let config = *self.session.config();
        let source = TargetSource::Random { seed: None };
        match source.resolve(self.answers, self.dictionary) {
            Ok(target) => {
                self.session = GameSession::new(target, config);
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn report(&mut self, result: Result<(), GameError>) {
        if let Err(err) = result {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClass;
    use crate::game::GameConfig;
    use crate::wordlists::ALLOWED;
    use crate::wordlists::loader::words_from_slice;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn new_app<'a>(dictionary: &'a WordList, answers: &'a [Word], max_guesses: usize) -> App<'a> {
        let session = GameSession::new(
            Word::new("crane").unwrap(),
            GameConfig::new(max_guesses).unwrap(),
        );
        App::new(session, dictionary, answers)
    }

    #[test]
    fn letters_and_backspace_edit_buffer() {
        let dictionary = WordList::from_slice(ALLOWED);
        let answers = words_from_slice(&["crane"]);
        let mut app = new_app(&dictionary, &answers, 6);

        type_word(&mut app, "Trx");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session.buffer().current(), "tr");

        press(&mut app, KeyCode::Delete);
        assert_eq!(app.session.buffer().current(), "t");
    }

    #[test]
    fn enter_submits_and_updates_keyboard() {
        let dictionary = WordList::from_slice(ALLOWED);
        let answers = words_from_slice(&["crane"]);
        let mut app = new_app(&dictionary, &answers, 6);

        type_word(&mut app, "trace");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.guesses_made(), 1);
        assert!(app.session.buffer().is_empty());
        assert_eq!(
            app.session.keyboard().get('c'),
            Some(LetterClass::PresentElsewhere)
        );
    }

    #[test]
    fn rejected_submission_shows_error_message() {
        let dictionary = WordList::from_slice(ALLOWED);
        let answers = words_from_slice(&["crane"]);
        let mut app = new_app(&dictionary, &answers, 6);

        type_word(&mut app, "cra");
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Not enough letters (3/5)");
        assert_eq!(app.session.buffer().current(), "cra");
    }

    #[test]
    fn winning_records_stats_and_new_game_resets() {
        let dictionary = WordList::from_slice(ALLOWED);
        let answers = words_from_slice(&["crane"]);
        let mut app = new_app(&dictionary, &answers, 6);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('a'));
        assert!(app.session.buffer().is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.status(), GameStatus::AcceptingInput);
        assert_eq!(app.session.guesses_made(), 0);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn losing_reveals_target() {
        let dictionary = WordList::from_slice(ALLOWED);
        let answers = words_from_slice(&["crane"]);
        let mut app = new_app(&dictionary, &answers, 1);

        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.status(), GameStatus::Lost);
        assert!(app.messages.iter().any(|m| m.text == "The word was CRANE"));
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dictionary = WordList::from_slice(ALLOWED);
        let answers = words_from_slice(&["crane"]);

        let mut app = new_app(&dictionary, &answers, 6);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app(&dictionary, &answers, 6);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.session.buffer().is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let dictionary = WordList::from_slice(ALLOWED);
        let answers = words_from_slice(&["crane"]);
        let mut app = new_app(&dictionary, &answers, 6);

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
