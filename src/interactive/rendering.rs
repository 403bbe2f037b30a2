//! TUI rendering with ratatui
//!
//! Draws the guess grid, the on-screen keyboard, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::{KEYBOARD_ROWS, LetterClass, WORD_LENGTH};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = u16::try_from(app.session.config().max_guesses())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board + side panel
            Constraint::Length(5),            // Keyboard
            Constraint::Length(3),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Messages and stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colours for a classification; `None` is an unrevealed tile
#[must_use]
pub fn tile_style(class: Option<LetterClass>) -> Style {
    match class {
        Some(LetterClass::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterClass::PresentElsewhere) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterClass::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: char, class: Option<LetterClass>) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), tile_style(class))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// One line per allowed guess: submitted rows, the row being typed, then blanks
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let max_guesses = session.config().max_guesses();
    let mut lines = Vec::new();

    for record in session.history() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, &class) in record
            .word()
            .text()
            .chars()
            .zip(record.feedback().classes())
        {
            spans.push(tile(letter, Some(class)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if session.status() == GameStatus::AcceptingInput {
        let typed: Vec<char> = session.buffer().current().chars().collect();
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for i in 0..WORD_LENGTH {
            let letter = typed.get(i).copied().unwrap_or('_');
            spans.push(tile(letter, None));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < max_guesses {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let title = format!(
        " Guess {}/{} ",
        session.guesses_made().min(session.config().max_guesses()),
        session.config().max_guesses()
    );

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Guess distribution
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let distribution = &app.stats.guess_distribution;
    let most = distribution.iter().copied().max().unwrap_or(0).max(1);
    let bar_width = usize::from(area.width.saturating_sub(12));

    let lines: Vec<Line> = distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let filled = count * bar_width / most;
            Line::from(vec![
                Span::raw(format!("{}: ", i + 1)),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let last_row = KEYBOARD_ROWS.len() - 1;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let mut spans = Vec::new();
            if row_index == last_row {
                spans.push(Span::styled("ENTER ", Style::default().fg(Color::Cyan)));
            }
            for letter in row.chars() {
                spans.push(tile(letter, keyboard.get(letter)));
                spans.push(Span::raw(" "));
            }
            if row_index == last_row {
                spans.push(Span::styled("⌫", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let (mode_text, mode_color) = match app.session.status() {
        GameStatus::AcceptingInput => ("Playing".to_string(), Color::White),
        GameStatus::Won => ("🎉 Solved!".to_string(), Color::Green),
        GameStatus::Lost => (
            format!(
                "Answer: {}",
                app.session
                    .revealed_target()
                    .map(|word| word.text().to_uppercase())
                    .unwrap_or_default()
            ),
            Color::Red,
        ),
    };
    let mode = Paragraph::new(mode_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(mode_color));
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} | Best: {}",
        app.stats.current_streak, app.stats.max_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if app.session.status().is_terminal() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | ⌫: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
