//! Clock face drawn on a braille canvas

use ratatui::prelude::*;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::*;

use crate::clock::{polar_to_cartesian, ClockFace, FaceLayout};
use crate::tui::styles::Theme;

/// Distance between the concentric passes that give the ring its thickness
const STROKE_STEP: f64 = 3.0;
const ANGLE_STEP: f64 = 1.0;

pub struct ClockFaceWidget<'a> {
    face: &'a ClockFace,
    colors: &'a [Color],
    theme: &'a Theme,
}

impl<'a> ClockFaceWidget<'a> {
    pub fn new(face: &'a ClockFace, colors: &'a [Color], theme: &'a Theme) -> Self {
        Self {
            face,
            colors,
            theme,
        }
    }

    fn color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            self.theme.accent
        } else {
            self.colors[index % self.colors.len()]
        }
    }

    fn centre_lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        match &self.face.progress {
            Some(progress) => vec![
                Line::from(Span::styled(
                    progress.name.clone(),
                    Style::default().fg(theme.hint),
                )),
                Line::from(Span::styled(
                    progress.remaining_label(),
                    Style::default().fg(theme.countdown).bold(),
                )),
                Line::from(Span::styled("Remaining", Style::default().fg(theme.dimmed))),
                Line::from(Span::styled(
                    format!("{} min left", progress.time_left),
                    Style::default().fg(theme.text),
                )),
            ],
            None => vec![
                Line::from(Span::styled("☀", Style::default().fg(theme.free_time).bold())),
                Line::from(Span::styled("Free Time!", Style::default().fg(theme.text))),
            ],
        }
    }
}

/// Largest rect with a 2:1 column/row ratio centred in `area`, so the circle
/// looks round in a terminal cell grid
pub(crate) fn square_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Radii covering the ring's stroke width
fn stroke_radii(layout: &FaceLayout) -> Vec<f64> {
    let half = layout.stroke_width / 2.0;
    let mut radii = Vec::new();
    let mut offset = -half;
    while offset <= half {
        radii.push(layout.radius() + offset);
        offset += STROKE_STEP;
    }
    radii
}

/// Canvas coordinates (y up) of points along an arc, across the stroke width
fn arc_points(layout: &FaceLayout, start_angle: f64, end_angle: f64) -> Vec<(f64, f64)> {
    let c = layout.center();
    let radii = stroke_radii(layout);
    let mut coords = Vec::new();
    let mut angle = start_angle;
    while angle <= end_angle {
        for r in &radii {
            let p = polar_to_cartesian(c, c, *r, angle);
            coords.push((p.x, layout.size - p.y));
        }
        angle += ANGLE_STEP;
    }
    coords
}

impl Widget for ClockFaceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = square_area(area);
        if area.width < 4 || area.height < 2 {
            return;
        }

        let layout = self.face.layout;
        let size = layout.size;
        let c = layout.center();
        let arc_coords: Vec<(Vec<(f64, f64)>, Color)> = self
            .face
            .arcs
            .iter()
            .map(|arc| {
                (
                    arc_points(&layout, arc.start_angle, arc.end_angle),
                    self.color(arc.color_index),
                )
            })
            .collect();

        Canvas::default()
            .marker(ratatui::symbols::Marker::Braille)
            .x_bounds([0.0, size])
            .y_bounds([0.0, size])
            .paint(|ctx| {
                for r in stroke_radii(&layout) {
                    ctx.draw(&Circle {
                        x: c,
                        y: c,
                        radius: r,
                        color: self.theme.ring,
                    });
                }
                for (coords, color) in &arc_coords {
                    ctx.draw(&Points {
                        coords: coords.as_slice(),
                        color: *color,
                    });
                }
                for tip in [self.face.hand_tip, self.face.hand_tail] {
                    ctx.draw(&CanvasLine {
                        x1: c,
                        y1: c,
                        x2: tip.x,
                        y2: size - tip.y,
                        color: self.theme.hand,
                    });
                }

                ctx.layer();
                for arc in &self.face.arcs {
                    ctx.print(
                        arc.icon_pos.x,
                        size - arc.icon_pos.y,
                        Span::styled(
                            arc.icon.glyph(),
                            Style::default().fg(self.theme.background).bold(),
                        ),
                    );
                }
            })
            .render(area, buf);

        let lines = self.centre_lines();
        let text_height = lines.len() as u16;
        let text_width = (area.width / 3).max(12).min(area.width);
        let centre = Rect {
            x: area.x + (area.width - text_width) / 2,
            y: area.y + area.height.saturating_sub(text_height) / 2,
            width: text_width,
            height: text_height.min(area.height),
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centre, buf);
    }
}
