//! Add task dialog

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::{Icon, NewTask};
use crate::tui::components::{render_text_field, LABEL_WIDTH};
use crate::tui::styles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Start,
    End,
    Icon,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Name, Field::Start, Field::End, Field::Icon];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward { pos + 1 } else { pos + len - 1 };
        Self::ORDER[next % len]
    }
}

pub struct NewTaskDialog {
    name: Input,
    start_time: Input,
    end_time: Input,
    icon: Icon,
    focused: Field,
    error_message: Option<String>,
}

impl Default for NewTaskDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTaskDialog {
    pub fn new() -> Self {
        Self {
            name: Input::default(),
            start_time: Input::default(),
            end_time: Input::default(),
            icon: Icon::default(),
            focused: Field::Name,
            error_message: None,
        }
    }

    /// Show a rejection reason; the form keeps its values
    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    fn submission(&self) -> NewTask {
        NewTask::new(
            self.name.value(),
            self.start_time.value(),
            self.end_time.value(),
            self.icon,
        )
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<NewTask> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => DialogResult::Submit(self.submission()),
            KeyCode::Tab | KeyCode::Down => {
                self.focused = self.focused.step(true);
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused = self.focused.step(false);
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char(' ') if self.focused == Field::Icon => {
                self.icon = self.icon.next();
                DialogResult::Continue
            }
            KeyCode::Left if self.focused == Field::Icon => {
                self.icon = self.icon.prev();
                DialogResult::Continue
            }
            _ => {
                let input = match self.focused {
                    Field::Name => &mut self.name,
                    Field::Start => &mut self.start_time,
                    Field::End => &mut self.end_time,
                    Field::Icon => return DialogResult::Continue,
                };
                if input.handle_event(&Event::Key(key)).is_some() {
                    self.error_message = None;
                }
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 52, 13);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .title(" Add New Task ")
            .title_style(Style::default().fg(theme.title).bold());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(1), // error
                Constraint::Length(1),
                Constraint::Length(2), // name
                Constraint::Length(2), // start
                Constraint::Length(2), // end
                Constraint::Length(2), // icon
                Constraint::Min(1),    // hints
            ])
            .split(inner);

        if let Some(error) = &self.error_message {
            frame.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(theme.error)),
                rows[0],
            );
        }

        render_text_field(
            frame,
            rows[2],
            "Name",
            &self.name,
            self.focused == Field::Name,
            Some("Task name"),
            theme,
        );
        render_text_field(
            frame,
            rows[3],
            "Start",
            &self.start_time,
            self.focused == Field::Start,
            Some("HH:MM"),
            theme,
        );
        render_text_field(
            frame,
            rows[4],
            "End",
            &self.end_time,
            self.focused == Field::End,
            Some("HH:MM"),
            theme,
        );

        let icon_focused = self.focused == Field::Icon;
        let label_style = if icon_focused {
            Style::default().fg(theme.accent).bold()
        } else {
            Style::default().fg(theme.hint)
        };
        let arrow_style = if icon_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.dimmed)
        };
        let icon_line = Line::from(vec![
            Span::styled(format!("{:<width$}", "Icon", width = LABEL_WIDTH), label_style),
            Span::styled("◀ ", arrow_style),
            Span::styled(
                format!("{} {}", self.icon.glyph(), self.icon.name()),
                Style::default().fg(theme.text),
            ),
            Span::styled(" ▶", arrow_style),
        ]);
        frame.render_widget(Paragraph::new(icon_line), rows[5]);

        let hint = Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.hint)),
            Span::raw(" next  "),
            Span::styled("←/→", Style::default().fg(theme.hint)),
            Span::raw(" icon  "),
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" add  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(theme.dimmed)),
            rows[6],
        );
    }
}
