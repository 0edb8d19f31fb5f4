//! Main TUI application

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::prelude::*;

use super::home::HomeView;
use super::styles::Theme;
use crate::clock::{SystemClock, Ticker};
use crate::config::Config;
use crate::task::TaskStore;

pub struct App {
    home: HomeView,
    should_quit: bool,
    theme: Theme,
    tick_interval: std::time::Duration,
}

impl App {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        Self {
            home: HomeView::new(store, config),
            should_quit: false,
            theme: Theme::default(),
            tick_interval: config.tui.tick_interval(),
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        let (ticker, mut ticks) = Ticker::spawn(self.tick_interval, SystemClock);
        let mut events = EventStream::new();

        while !self.should_quit {
            tokio::select! {
                tick = ticks.recv() => {
                    let Some(now) = tick else {
                        tracing::warn!("Clock ticker stopped unexpectedly");
                        break;
                    };
                    self.home.tick(now);
                }
                event = events.next() => {
                    match event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        // Resize and friends just need a redraw
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            ticker.cancel();
                            return Err(e.into());
                        }
                        None => break,
                    }
                }
            }

            terminal.draw(|f| self.render(f))?;
        }

        ticker.cancel();
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        self.home.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.home.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}
