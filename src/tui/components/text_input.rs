//! Labelled single-line text field

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Columns reserved for field labels so values line up
pub const LABEL_WIDTH: usize = 8;

/// Render `label` followed by the field value.
///
/// A focused field shows an inverse-video cursor and scrolls horizontally to
/// keep it visible; an empty unfocused field shows the placeholder.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    placeholder: Option<&str>,
    theme: &Theme,
) {
    let label_style = if is_focused {
        Style::default().fg(theme.accent).bold()
    } else {
        Style::default().fg(theme.hint)
    };
    let mut spans = vec![Span::styled(
        format!("{:<width$}", label, width = LABEL_WIDTH),
        label_style,
    )];

    let value = input.value();
    if !is_focused {
        match (value.is_empty(), placeholder) {
            (true, Some(text)) => spans.push(Span::styled(
                text.to_string(),
                Style::default().fg(theme.dimmed).italic(),
            )),
            _ => spans.push(Span::styled(
                value.to_string(),
                Style::default().fg(theme.text),
            )),
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        return;
    }

    let field_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 1).max(1);
    let scroll = input.visual_scroll(field_width);
    let cursor = input.visual_cursor().saturating_sub(scroll);

    let visible: Vec<char> = value.chars().skip(scroll).take(field_width).collect();
    let before: String = visible.iter().take(cursor).collect();
    let at_cursor = visible
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = visible.iter().skip(cursor + 1).collect();

    let value_style = Style::default().fg(theme.accent);
    spans.push(Span::styled(before, value_style));
    spans.push(Span::styled(
        at_cursor,
        Style::default().fg(theme.background).bg(theme.accent),
    ));
    spans.push(Span::styled(after, value_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
