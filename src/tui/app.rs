//! Application state and key handling.
//!
//! Pure with respect to the terminal: keys and clock readings come in,
//! state changes come out. The run loop in the parent module does I/O.

use super::input::{move_cursor, snake_direction};
use crate::config::ArcadeConfig;
use crate::session::ArcadeSession;
use crossterm::event::KeyCode;
use pocket_rps::{Choice, RoundResult};
use pocket_snake::{Status, Tick};
use pocket_tictactoe::{Outcome, Position};
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::time::Instant;
use tracing::{debug, info};

/// Games on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum GameKind {
    /// Tic-tac-toe.
    TicTacToe,
    /// Snake.
    Snake,
    /// Rock-paper-scissors.
    Rps,
}

impl GameKind {
    /// Menu label.
    pub fn name(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::Snake => "Snake",
            GameKind::Rps => "Rock Paper Scissors",
        }
    }
}

/// What is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Game picker.
    Menu,
    /// A game.
    Game(GameKind),
}

/// Whether the run loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    session: ArcadeSession,
    screen: Screen,
    menu_index: usize,
    cursor: Position,
    status: String,
    computer_delay: Duration,
    computer_due: Option<Instant>,
    snake_tick: Duration,
    auto_play: bool,
    next_snake_tick: Option<Instant>,
}

impl App {
    /// Creates the app showing `screen`.
    pub fn new(config: &ArcadeConfig, screen: Screen) -> Self {
        let mut app = Self {
            session: ArcadeSession::new(config),
            screen,
            menu_index: 0,
            cursor: Position::Center,
            status: String::new(),
            computer_delay: Duration::from_millis(*config.tictactoe().computer_delay_ms()),
            computer_due: None,
            snake_tick: Duration::from_millis(*config.snake().tick_ms()),
            auto_play: *config.snake().auto_play(),
            next_snake_tick: None,
        };
        app.status = app.greeting();
        app
    }

    /// Game state.
    pub fn session(&self) -> &ArcadeSession {
        &self.session
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Highlighted menu entry.
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Tic-tac-toe cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while the computer's reply is pending.
    pub fn computer_thinking(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Snake moves on a timer.
    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Control {
        if key == KeyCode::Char('q') {
            info!("User quit");
            return Control::Quit;
        }
        if key == KeyCode::Esc {
            return match self.screen {
                Screen::Menu => Control::Quit,
                Screen::Game(_) => {
                    self.open(Screen::Menu, now);
                    Control::Continue
                }
            };
        }

        match self.screen {
            Screen::Menu => self.menu_key(key, now),
            Screen::Game(GameKind::TicTacToe) => self.tictactoe_key(key, now),
            Screen::Game(GameKind::Snake) => self.snake_key(key, now),
            Screen::Game(GameKind::Rps) => self.rps_key(key),
        }
        Control::Continue
    }

    /// Fires timers that are due: the computer's reply and the snake tick.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(due) = self.computer_due
            && now >= due
        {
            self.computer_due = None;
            if let Some(pos) = self.session.computer_turn() {
                self.status = format!("Computer played {}", pos);
                self.after_tictactoe_move();
            }
        }

        if let Some(due) = self.next_snake_tick
            && now >= due
        {
            self.advance_snake();
            self.next_snake_tick = self.snake_running().then(|| now + self.snake_tick);
        }
    }

    fn open(&mut self, screen: Screen, now: Instant) {
        debug!(?screen, "Switching screen");
        self.screen = screen;
        self.computer_due = None;
        self.next_snake_tick = None;
        self.status = self.greeting();
        // A reply cancelled by leaving the board is owed again on return.
        if screen == Screen::Game(GameKind::TicTacToe)
            && self.session.table().computer_pending()
        {
            self.computer_due = Some(now + self.computer_delay);
            self.status = "Computer is thinking...".to_string();
        }
    }

    fn greeting(&self) -> String {
        match self.screen {
            Screen::Menu => "Pick a game".to_string(),
            Screen::Game(GameKind::TicTacToe) => self.tictactoe_status(),
            Screen::Game(GameKind::Snake) => "Press an arrow key to start".to_string(),
            Screen::Game(GameKind::Rps) => "Choose Rock, Paper, or Scissors".to_string(),
        }
    }

    fn menu_key(&mut self, key: KeyCode, now: Instant) {
        let games: Vec<GameKind> = GameKind::iter().collect();
        match key {
            KeyCode::Up => self.menu_index = self.menu_index.saturating_sub(1),
            KeyCode::Down => self.menu_index = (self.menu_index + 1).min(games.len() - 1),
            KeyCode::Enter => self.open(Screen::Game(games[self.menu_index]), now),
            KeyCode::Char(c) => {
                if let Some(game) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|i| games.get(i))
                {
                    self.open(Screen::Game(*game), now);
                }
            }
            _ => {}
        }
    }

    fn tictactoe_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor, now),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_key(c) {
                    self.cursor = pos;
                    self.place(pos, now);
                }
            }
            KeyCode::Char('r') => {
                self.session.table_mut().reset_board();
                self.computer_due = None;
                self.status = self.tictactoe_status();
            }
            KeyCode::Char('m') => {
                let mode = self.session.table().mode().toggle();
                self.session.table_mut().set_mode(mode);
                self.computer_due = None;
                self.status = format!("Mode: {}. {}", mode.name(), self.tictactoe_status());
            }
            KeyCode::Char('c') => {
                self.session.table_mut().reset_scores();
                self.status = "Scores cleared".to_string();
            }
            _ => {}
        }
    }

    fn place(&mut self, pos: Position, now: Instant) {
        if !self.session.play_square(pos) {
            return;
        }
        self.status = format!("Played {}", pos);
        self.after_tictactoe_move();
        if self.session.table().computer_pending() {
            self.computer_due = Some(now + self.computer_delay);
            self.status = "Computer is thinking...".to_string();
        }
    }

    fn after_tictactoe_move(&mut self) {
        if self.session.table().phase().is_over() {
            self.status = self.tictactoe_status();
        }
    }

    fn tictactoe_status(&self) -> String {
        let phase = self.session.table().phase();
        match (phase.outcome(), phase.to_move()) {
            (Some(Outcome::Winner(player)), _) => {
                format!("Winner: {}! Press 'r' for a new board.", player)
            }
            (Some(Outcome::Draw), _) => "It's a draw! Press 'r' for a new board.".to_string(),
            (None, Some(player)) => format!("Current player: {}", player),
            (None, None) => String::new(),
        }
    }

    fn snake_key(&mut self, key: KeyCode, now: Instant) {
        if let Some(direction) = snake_direction(key) {
            // A reversing key is ignored as a turn but still starts the game.
            if !self.session.turn_snake(direction)
                && self.session.snake().status() == Status::Ready
            {
                let heading = self.session.snake().direction();
                self.session.turn_snake(heading);
            }
            if !self.auto_play {
                self.advance_snake();
            } else if self.snake_running() {
                self.next_snake_tick.get_or_insert(now + self.snake_tick);
            }
            return;
        }

        match key {
            KeyCode::Char(' ') if !self.auto_play => self.advance_snake(),
            KeyCode::Char('r') => {
                self.session.restart_snake();
                self.next_snake_tick = None;
                self.status = "New game. Press an arrow key to start".to_string();
            }
            KeyCode::Char('p') => {
                self.auto_play = !self.auto_play;
                self.next_snake_tick = (self.auto_play && self.snake_running())
                    .then(|| now + self.snake_tick);
                self.status = format!(
                    "Auto play {}",
                    if self.auto_play { "on" } else { "off" }
                );
            }
            _ => {}
        }
    }

    fn snake_running(&self) -> bool {
        self.session.snake().status() == Status::Playing
    }

    fn advance_snake(&mut self) {
        let tick = self.session.tick_snake();
        let snake = self.session.snake();
        match tick {
            Tick::Idle | Tick::Moved => {}
            Tick::Ate => self.status = format!("Yum! Score {}", snake.score()),
            Tick::Crashed(collision) => {
                let record = snake.score() > 0 && snake.score() == snake.high_score();
                self.status = format!(
                    "Game over: the snake {}.{} Press 'r' to restart.",
                    collision,
                    if record { " New high score!" } else { "" }
                );
            }
            Tick::Filled => self.status = "The snake fills the board. You win!".to_string(),
        }
    }

    fn rps_key(&mut self, key: KeyCode) {
        if let KeyCode::Char(c) = key {
            if let Some(choice) = Choice::from_key(c) {
                self.play_rps(choice);
            } else if c == 'n' {
                self.session.reset_rps();
                self.status = "Scores reset".to_string();
            }
        }
    }

    fn play_rps(&mut self, choice: Choice) {
        let round = self.session.play_rps(choice);
        self.status = match round.result {
            RoundResult::Win => format!("You win! {} beats {}", round.player, round.computer),
            RoundResult::Lose => {
                format!("Computer wins! {} beats {}", round.computer, round.player)
            }
            RoundResult::Draw => format!("Draw! Both chose {}", round.player),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(screen: Screen) -> App {
        let config = ArcadeConfig::default()
            .with_overrides(crate::config::Overrides {
                seed: Some(1),
                ..Default::default()
            })
            .unwrap();
        App::new(&config, screen)
    }

    #[test]
    fn test_menu_opens_games() {
        let now = Instant::now();
        let mut app = app(Screen::Menu);
        app.handle_key(KeyCode::Down, now);
        app.handle_key(KeyCode::Enter, now);
        assert_eq!(app.screen(), Screen::Game(GameKind::Snake));
        app.handle_key(KeyCode::Esc, now);
        assert_eq!(app.screen(), Screen::Menu);
        app.handle_key(KeyCode::Char('3'), now);
        assert_eq!(app.screen(), Screen::Game(GameKind::Rps));
        assert_eq!(app.handle_key(KeyCode::Char('q'), now), Control::Quit);
    }

    #[test]
    fn test_computer_replies_after_delay() {
        let now = Instant::now();
        let mut app = app(Screen::Game(GameKind::TicTacToe));
        app.handle_key(KeyCode::Char('1'), now);
        assert!(app.computer_thinking());

        app.on_tick(now);
        assert_eq!(app.session().table().board().mark_count(), 1);

        app.on_tick(now + Duration::from_millis(600));
        assert!(!app.computer_thinking());
        assert_eq!(app.session().table().board().mark_count(), 2);
        assert!(!app.session().table().board().is_empty(Position::Center));
    }

    #[test]
    fn test_computer_reply_survives_leaving_board() {
        let now = Instant::now();
        let mut app = app(Screen::Menu);
        app.handle_key(KeyCode::Char('1'), now);
        app.handle_key(KeyCode::Char('1'), now);
        assert!(app.computer_thinking());

        app.handle_key(KeyCode::Esc, now);
        assert!(!app.computer_thinking());
        let back = now + Duration::from_secs(1);
        app.handle_key(KeyCode::Char('1'), back);
        assert_eq!(app.screen(), Screen::Game(GameKind::TicTacToe));
        assert!(app.computer_thinking());

        for secs in 2..=4 {
            app.on_tick(now + Duration::from_secs(secs));
        }
        assert_eq!(app.session().table().board().mark_count(), 2);

        app.handle_key(KeyCode::Char('9'), now + Duration::from_secs(5));
        assert_eq!(app.session().table().board().mark_count(), 3);
    }

    #[test]
    fn test_reverse_key_still_steps_snake() {
        let now = Instant::now();
        let mut app = app(Screen::Game(GameKind::Snake));
        let head = app.session().snake().snake().head();

        app.handle_key(KeyCode::Left, now);
        assert_eq!(app.session().snake().status(), Status::Playing);
        assert_eq!(app.session().snake().snake().head().x, head.x + 1);

        app.handle_key(KeyCode::Left, now);
        assert_eq!(app.session().snake().snake().head().x, head.x + 2);
        assert_eq!(app.session().snake().snake().head().y, head.y);
    }

    #[test]
    fn test_snake_moves_per_key_without_auto_play() {
        let now = Instant::now();
        let mut app = app(Screen::Game(GameKind::Snake));
        let head = app.session().snake().snake().head();
        app.handle_key(KeyCode::Up, now);
        assert_eq!(app.session().snake().snake().head().y, head.y - 1);
        app.handle_key(KeyCode::Char(' '), now);
        assert_eq!(app.session().snake().snake().head().y, head.y - 2);
    }
}
