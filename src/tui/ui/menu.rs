//! Game picker.

use super::center_rect;
use crate::tui::app::{App, GameKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = GameKind::iter()
        .enumerate()
        .map(|(i, game)| {
            let label = format!(" {}. {} ", i + 1, game.name());
            if i == app.menu_index() {
                Line::from(Span::styled(
                    label,
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(label)
            }
        })
        .collect();

    let menu = Paragraph::new(lines).block(Block::default().title("Games").borders(Borders::ALL));
    frame.render_widget(menu, center_rect(area, 32, 5));
}
