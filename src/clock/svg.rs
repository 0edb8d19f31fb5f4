//! SVG rendering of a clock face

use std::fmt::Write;

use super::face::ClockFace;
use super::geometry::coord;

/// Arc colours, cycled by position within the hour
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#818cf8", "#fb923c", "#4ade80", "#f87171", "#60a5fa", "#a78bfa",
];

const RING_COLOR: &str = "#e0e0e0";
const HAND_COLOR: &str = "#1e293b";
const MUTED_TEXT: &str = "#6b7280";
const ACCENT_TEXT: &str = "#2563eb";
const FREE_TIME_COLOR: &str = "#eab308";

/// Render `face` as a standalone SVG document.
///
/// An empty palette falls back to [`DEFAULT_PALETTE`].
pub fn render_svg<S: AsRef<str>>(face: &ClockFace, palette: &[S]) -> String {
    let layout = &face.layout;
    let size = coord(layout.size);
    let center = coord(layout.center());
    let stroke = coord(layout.stroke_width);

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(
        out,
        r#"  <circle cx="{center}" cy="{center}" r="{}" fill="none" stroke="{RING_COLOR}" stroke-width="{stroke}" />"#,
        coord(layout.radius())
    );

    for arc in &face.arcs {
        let color = pick_color(palette, arc.color_index);
        let _ = writeln!(out, r#"  <g data-task-id="{}">"#, arc.id);
        let _ = writeln!(
            out,
            r#"    <path d="{}" fill="none" stroke="{}" stroke-width="{stroke}" />"#,
            arc.path,
            escape(color)
        );
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" fill="white" font-size="16" text-anchor="middle" dominant-baseline="central"><title>{}</title>{}</text>"#,
            coord(arc.icon_pos.x),
            coord(arc.icon_pos.y),
            escape(&arc.name),
            arc.icon.glyph()
        );
        let _ = writeln!(out, "  </g>");
    }

    for tip in [face.hand_tip, face.hand_tail] {
        let _ = writeln!(
            out,
            r#"  <line x1="{center}" y1="{center}" x2="{}" y2="{}" stroke="{HAND_COLOR}" stroke-width="2" stroke-linecap="round" />"#,
            coord(tip.x),
            coord(tip.y)
        );
    }
    let _ = writeln!(
        out,
        r#"  <circle cx="{center}" cy="{center}" r="5" fill="{HAND_COLOR}" />"#
    );

    let c = layout.center();
    match &face.progress {
        Some(progress) => {
            centre_text(&mut out, c, c - 38.0, 13, MUTED_TEXT, &progress.name);
            centre_text(
                &mut out,
                c,
                c + 4.0,
                44,
                ACCENT_TEXT,
                &progress.remaining_label(),
            );
            centre_text(&mut out, c, c + 28.0, 11, MUTED_TEXT, "Remaining");
            centre_text(
                &mut out,
                c,
                c + 50.0,
                13,
                MUTED_TEXT,
                &format!("{} min left", progress.time_left),
            );
        }
        None => {
            centre_text(&mut out, c, c - 14.0, 36, FREE_TIME_COLOR, "☀");
            centre_text(&mut out, c, c + 24.0, 15, MUTED_TEXT, "Free Time!");
        }
    }

    out.push_str("</svg>\n");
    out
}

fn pick_color<S: AsRef<str>>(palette: &[S], index: usize) -> &str {
    if palette.is_empty() {
        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
    } else {
        palette[index % palette.len()].as_ref()
    }
}

fn centre_text(out: &mut String, x: f64, y: f64, font_size: u32, fill: &str, text: &str) {
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="middle">{}</text>"#,
        coord(x),
        coord(y),
        escape(text)
    );
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
