//! Terminal UI for the arcade.

mod app;
mod input;
mod ui;

pub use app::{App, Control, GameKind, Screen};
pub use input::{move_cursor, snake_direction};

use crate::config::ArcadeConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::{Duration, Instant, sleep};
use tracing::{error, info, instrument};

const FRAME: Duration = Duration::from_millis(30);

/// Runs the arcade until the user quits.
#[instrument(skip(config))]
pub async fn run_tui(config: &ArcadeConfig, screen: Screen) -> Result<()> {
    info!("Starting Pocket Arcade TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, screen);
    let res = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(seed = app.session().seed(), "Pocket Arcade TUI stopped");
    res
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && app.handle_key(key.code, Instant::now()) == Control::Quit
            {
                return Ok(());
            }
        }

        app.on_tick(Instant::now());
        sleep(FRAME).await;
    }
}
