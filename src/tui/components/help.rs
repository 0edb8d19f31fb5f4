//! Help overlay component

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::styles::Theme;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 18;
const KEY_COLUMN_WIDTH: usize = 10;

fn shortcuts() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            "Tasks",
            vec![
                ("j/↓", "Next task"),
                ("k/↑", "Previous task"),
                ("n", "Add task"),
                ("d/Del", "Delete selected task"),
            ],
        ),
        (
            "Add task form",
            vec![
                ("Tab", "Next field"),
                ("←/→", "Change icon"),
                ("Enter", "Add"),
            ],
        ),
        ("Other", vec![("?", "Toggle help"), ("q", "Quit")]),
    ]
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (section, keys) in shortcuts() {
        lines.push(Line::from(Span::styled(
            section,
            Style::default().fg(theme.accent).bold(),
        )));
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH - 2),
                    Style::default().fg(theme.hint),
                ),
                Span::styled(desc, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.pop();
    lines
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = crate::tui::dialogs::centered_rect(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);
        frame.render_widget(Paragraph::new(help_lines(theme)), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_content_fits_in_dialog() {
        let lines = help_lines(&Theme::default());
        let available_height = (DIALOG_HEIGHT - 2) as usize;
        assert!(
            lines.len() <= available_height,
            "Help content ({} lines) exceeds dialog inner height ({available_height} lines)",
            lines.len()
        );

        let available_width = (DIALOG_WIDTH - 2) as usize;
        for line in &lines {
            assert!(
                line.width() <= available_width,
                "Help line '{line}' exceeds dialog width ({available_width} columns)"
            );
        }
    }
}
