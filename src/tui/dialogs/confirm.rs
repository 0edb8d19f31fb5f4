//! Delete confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::task::{Icon, Task, TaskId};
use crate::tui::styles::Theme;

pub struct ConfirmDialog {
    target: TaskId,
    name: String,
    span: String,
    icon: Icon,
    confirm_selected: bool,
}

impl ConfirmDialog {
    /// Dialog asking whether to delete `task`
    pub fn delete_task(task: &Task) -> Self {
        Self {
            target: task.id,
            name: task.name.clone(),
            span: format!("{} - {}", task.start_time, task.end_time),
            icon: task.icon,
            confirm_selected: false,
        }
    }

    pub fn target(&self) -> TaskId {
        self.target
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskId> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => DialogResult::Cancel,
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogResult::Submit(self.target),
            KeyCode::Enter if self.confirm_selected => DialogResult::Submit(self.target),
            KeyCode::Enter => DialogResult::Cancel,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.confirm_selected = !self.confirm_selected;
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 46, 9);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.error))
            .title(" Delete Task ")
            .title_style(Style::default().fg(theme.error).bold());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let button = |label: &'static str, active: bool, color: Color| {
            if active {
                Span::styled(label, Style::default().fg(theme.background).bg(color).bold())
            } else {
                Span::styled(label, Style::default().fg(theme.dimmed))
            }
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!(" {} ", self.icon.glyph()), Style::default().fg(theme.accent)),
                Span::styled(self.name.as_str(), Style::default().fg(theme.text).bold()),
            ]),
            Line::from(Span::styled(
                format!("   {}", self.span),
                Style::default().fg(theme.dimmed),
            )),
            Line::from(""),
            Line::from(vec![
                button(" Delete ", self.confirm_selected, theme.error),
                Span::raw("   "),
                button(" Keep ", !self.confirm_selected, theme.accent),
            ])
            .alignment(Alignment::Center),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
