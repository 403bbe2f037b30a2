//! Per-run game statistics
//!
//! Kept in memory only; nothing is saved between runs.

use super::session::{GameSession, GameStatus};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by guess count; index 0 is a first-guess win
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_guesses],
            ..Self::default()
        }
    }

    /// Count a finished session
    ///
    /// Sessions that are still in progress are ignored and `false` is returned.
    pub fn record(&mut self, session: &GameSession) -> bool {
        match session.status() {
            GameStatus::AcceptingInput => return false,
            GameStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);

                let slot = session.guesses_made().saturating_sub(1);
                if slot >= self.guess_distribution.len() {
                    self.guess_distribution.resize(slot + 1, 0);
                }
                self.guess_distribution[slot] += 1;
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.total_games += 1;
        true
    }

    /// Win percentage, 0 when no games were played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;

    fn finished(target: &str, guesses: &[&str]) -> GameSession {
        let mut session = GameSession::new(Word::new(target).unwrap(), GameConfig::new(3).unwrap());
        let accept = |_: &Word| true;
        for guess in guesses {
            for ch in guess.chars() {
                session.append_letter(ch).unwrap();
            }
            session.submit_guess(&accept).unwrap();
        }
        session
    }

    #[test]
    fn in_progress_game_not_counted() {
        let mut stats = Statistics::new(3);
        assert!(!stats.record(&finished("crane", &["slate"])));
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn wins_fill_distribution_and_streak() {
        let mut stats = Statistics::new(3);
        stats.record(&finished("crane", &["crane"]));
        stats.record(&finished("crane", &["slate", "crane"]));

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution, vec![1, 1, 0]);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = Statistics::new(3);
        stats.record(&finished("crane", &["crane"]));
        stats.record(&finished("crane", &["slate", "audio", "trace"]));

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_stats_have_zero_win_rate() {
        assert!(Statistics::new(6).win_rate().abs() < f64::EPSILON);
    }
}
