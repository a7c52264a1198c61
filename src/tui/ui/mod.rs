//! Stateless rendering. Each screen reads the app and draws one frame.

mod menu;
mod rps;
mod snake;
mod tictactoe;

use super::app::{App, GameKind, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Game
            Constraint::Length(3), // Status
            Constraint::Length(1), // Keys
        ])
        .split(frame.area());

    let title = match app.screen() {
        Screen::Menu => "Pocket Arcade".to_string(),
        Screen::Game(game) => format!("Pocket Arcade - {}", game.name()),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = match app.screen() {
        Screen::Menu => {
            menu::draw(frame, chunks[1], app);
            "Up/Down select  Enter open  1-3 shortcut  q quit"
        }
        Screen::Game(GameKind::TicTacToe) => {
            tictactoe::draw(frame, chunks[1], app);
            "Arrows move  Enter place  1-9 square  r new board  m mode  c clear scores  Esc menu"
        }
        Screen::Game(GameKind::Snake) => {
            snake::draw(frame, chunks[1], app);
            if app.auto_play() {
                "Arrows/WASD steer  p auto play off  r restart  Esc menu"
            } else {
                "Arrows/WASD move  Space step  p auto play on  r restart  Esc menu"
            }
        }
        Screen::Game(GameKind::Rps) => {
            rps::draw(frame, chunks[1], app);
            "r rock  p paper  s scissors  n reset  Esc menu"
        }
    };

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// A `width` x `height` rectangle centred in `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
