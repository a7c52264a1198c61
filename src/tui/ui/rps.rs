//! Rock-paper-scissors scoreboard and recent rounds.

use super::center_rect;
use crate::tui::app::App;
use pocket_rps::RoundResult;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let rps = app.session().rps();
    let scores = rps.scores();

    let mut lines = vec![
        Line::from(format!(
            "Wins: {}  Losses: {}  Draws: {}",
            scores.wins, scores.losses, scores.draws
        )),
        Line::from(format!(
            "Win rate: {:.1}%  Streak: {}  Best: {}",
            scores.win_rate(),
            scores.streak,
            scores.best_streak
        )),
        Line::from(""),
    ];

    if rps.last().is_none() {
        lines.push(Line::from("No rounds yet"));
    }
    for round in rps.history().rev() {
        let color = match round.result {
            RoundResult::Win => Color::Green,
            RoundResult::Lose => Color::Red,
            RoundResult::Draw => Color::Yellow,
        };
        lines.push(Line::from(vec![
            Span::raw(format!(
                "#{:<3} {:<8} vs {:<8} ",
                round.number,
                round.player.to_string(),
                round.computer.to_string()
            )),
            Span::styled(format!("{:?}", round.result), Style::default().fg(color)),
        ]));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().title("Scoreboard").borders(Borders::ALL));
    frame.render_widget(panel, center_rect(area, 46, 16));
}
