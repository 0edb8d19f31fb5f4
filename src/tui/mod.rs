//! Terminal User Interface module

mod app;
mod components;
pub mod dialogs;
mod home;
mod styles;

pub use app::*;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;

use crate::clock::{SystemClock, TimeSource};
use crate::task::TaskStore;

pub async fn run() -> Result<()> {
    let config = crate::cli::load_config()?;

    let now = SystemClock.now();
    let store = if config.seed_example_tasks {
        TaskStore::seeded(now)
    } else {
        TaskStore::new(now)
    };
    tracing::debug!("Starting TUI with {} tasks", store.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, &config);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
