//! Home view - clock face, task list and dialogs

use chrono::{NaiveDateTime, Timelike};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::app::Action;
use super::components::{ClockFaceWidget, HelpOverlay};
use super::dialogs::{ConfirmDialog, DialogResult, NewTaskDialog};
use super::styles::{arc_colors, Theme};
use crate::clock::{active_task, FaceLayout};
use crate::config::Config;
use crate::task::{TaskId, TaskStore};


pub struct HomeView {
    store: TaskStore,
    layout: FaceLayout,
    arc_colors: Vec<Color>,
    use_12_hour_clock: bool,

    // UI state
    cursor: usize,

    // Dialogs
    show_help: bool,
    new_dialog: Option<NewTaskDialog>,
    confirm_dialog: Option<ConfirmDialog>,
}

impl HomeView {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        Self {
            store,
            layout: config.clock.layout(),
            arc_colors: arc_colors(&config.clock.palette),
            use_12_hour_clock: config.tui.use_12_hour_clock,
            cursor: 0,
            show_help: false,
            new_dialog: None,
            confirm_dialog: None,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help || self.new_dialog.is_some() || self.confirm_dialog.is_some()
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        self.store.tick(now);
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.store.tasks().get(self.cursor).map(|t| t.id)
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.new_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.new_dialog = None,
                DialogResult::Submit(new_task) => match self.store.add_task(new_task) {
                    Ok(_) => {
                        self.new_dialog = None;
                        self.cursor = 0;
                    }
                    Err(err) => dialog.set_error(err.to_string()),
                },
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.confirm_dialog = None,
                DialogResult::Submit(id) => {
                    self.confirm_dialog = None;
                    self.store.delete_task(id);
                    self.clamp_cursor();
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('n') => self.new_dialog = Some(NewTaskDialog::new()),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(task) = self.selected_id().and_then(|id| self.store.get(id)) {
                    self.confirm_dialog = Some(ConfirmDialog::delete_task(task));
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.cursor + 1 < self.store.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.cursor = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.cursor = self.store.len().saturating_sub(1);
            }
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(frame, rows[0], theme);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        self.render_clock(frame, columns[0], theme);
        self.render_list(frame, columns[1], theme);
        self.render_status_bar(frame, rows[2], theme);

        if let Some(dialog) = &self.new_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let title = Line::from(vec![
            Span::styled(" ⚛ ", Style::default().fg(theme.accent)),
            Span::styled("Time Awareness Clock", Style::default().fg(theme.title).bold()),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }

    fn render_clock(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(2)])
            .split(inner);

        let face = self.store.face(&self.layout);
        frame.render_widget(ClockFaceWidget::new(&face, &self.arc_colors, theme), parts[0]);

        let now = self.store.now();
        let caption = vec![
            Line::from(Span::styled(
                format_time(now, self.use_12_hour_clock),
                Style::default().fg(theme.text).bold(),
            )),
            Line::from(Span::styled(
                now.format("%A, %B %-d, %Y").to_string(),
                Style::default().fg(theme.dimmed),
            )),
        ];
        frame.render_widget(
            Paragraph::new(caption).alignment(Alignment::Center),
            parts[1],
        );
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Today's Tasks ")
            .title_style(Style::default().fg(theme.title).bold());

        if self.store.is_empty() {
            let empty = Paragraph::new("No tasks scheduled yet.")
                .style(Style::default().fg(theme.dimmed))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let active = active_task(self.store.tasks(), self.store.now()).map(|t| t.id);
        let items: Vec<ListItem> = self
            .store
            .tasks()
            .iter()
            .map(|task| {
                let name_style = if Some(task.id) == active {
                    Style::default().fg(theme.countdown).bold()
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!(" {} ", task.icon.glyph()), Style::default().fg(theme.accent)),
                        Span::styled(task.name.clone(), name_style),
                    ]),
                    Line::from(Span::styled(
                        format!("   {} - {}", task.start_time, task.end_time),
                        Style::default().fg(theme.dimmed),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.selection))
            .highlight_symbol("▌");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = vec![
            Span::styled(" j/k", key_style),
            Span::styled(" Select ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" n", key_style),
            Span::styled(" Add ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" d", key_style),
            Span::styled(" Delete ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ?", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}

/// "08:05 AM" or "08:05"
pub(crate) fn format_time(now: NaiveDateTime, twelve_hour: bool) -> String {
    if twelve_hour {
        let (pm, hour) = now.hour12();
        format!("{:02}:{:02} {}", hour, now.minute(), if pm { "PM" } else { "AM" })
    } else {
        now.format("%H:%M").to_string()
    }
}
