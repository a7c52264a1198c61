//! Snake grid, two terminal columns per cell.

use super::center_rect;
use crate::tui::app::App;
use pocket_snake::{Cell, SnakeGame, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.session().snake();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = format!(
        "Score: {}   High score: {}   Length: {}",
        game.score(),
        game.high_score(),
        game.snake().len()
    );
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    let side = game.grid() as u16;
    let grid = Paragraph::new(grid_lines(game)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(game.status())),
    );
    frame.render_widget(grid, center_rect(chunks[1], side * 2 + 2, side + 2));
}

fn border_style(status: Status) -> Style {
    match status {
        Status::Over(_) => Style::default().fg(Color::Red),
        Status::Filled => Style::default().fg(Color::Green),
        Status::Ready | Status::Playing => Style::default(),
    }
}

fn grid_lines(game: &SnakeGame) -> Vec<Line<'static>> {
    let head = game.snake().head();
    (0..game.grid())
        .map(|y| {
            let spans: Vec<Span> = (0..game.grid())
                .map(|x| {
                    let cell = Cell::new(x, y);
                    if cell == head {
                        Span::styled("██", Style::default().fg(Color::LightGreen))
                    } else if game.snake().contains(cell) {
                        Span::styled("██", Style::default().fg(Color::Green))
                    } else if game.food() == Some(cell) {
                        Span::styled("()", Style::default().fg(Color::Red))
                    } else {
                        Span::styled(" ·", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
