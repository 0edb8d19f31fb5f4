//! TUI theme and styling

use ratatui::style::Color;
use std::str::FromStr;

use crate::clock::DEFAULT_PALETTE;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,
    pub error: Color,

    // Clock face
    pub ring: Color,
    pub hand: Color,
    pub countdown: Color,
    pub free_time: Color,

    // UI elements
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            border: Color::Rgb(55, 65, 81),
            selection: Color::Rgb(31, 41, 55),

            title: Color::Rgb(129, 140, 248),
            text: Color::Rgb(229, 231, 235),
            dimmed: Color::Rgb(107, 114, 128),
            hint: Color::Rgb(156, 163, 175),
            error: Color::Rgb(239, 68, 68),

            ring: Color::Rgb(75, 85, 99),
            hand: Color::Rgb(241, 245, 249),
            countdown: Color::Rgb(96, 165, 250),
            free_time: Color::Rgb(234, 179, 8),

            accent: Color::Rgb(129, 140, 248),
        }
    }
}

/// Parse the configured arc palette. Entries that are not valid colours are
/// skipped; an empty result falls back to the default palette.
pub fn arc_colors(palette: &[String]) -> Vec<Color> {
    let parsed: Vec<Color> = palette
        .iter()
        .filter_map(|c| match Color::from_str(c) {
            Ok(color) => Some(color),
            Err(_) => {
                tracing::warn!("Ignoring invalid palette colour '{}'", c);
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        DEFAULT_PALETTE
            .iter()
            .filter_map(|c| Color::from_str(c).ok())
            .collect()
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_colors_parses_hex() {
        let colors = arc_colors(&["#ff0000".to_string(), "nonsense!".to_string()]);
        assert_eq!(colors, vec![Color::Rgb(255, 0, 0)]);
    }

    #[test]
    fn test_arc_colors_falls_back_to_default() {
        let colors = arc_colors(&[]);
        assert_eq!(colors.len(), DEFAULT_PALETTE.len());
        assert_eq!(colors[0], Color::Rgb(0x81, 0x8c, 0xf8));
    }
}
