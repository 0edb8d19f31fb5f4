//! Polar layout on the clock face
//!
//! Angles are in degrees, clockwise from 12 o'clock, in a y-down coordinate
//! system (the SVG convention).

use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Point at `angle_deg` on a circle of radius `r` around `(cx, cy)`.
pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    Point {
        x: cx + r * rad.cos(),
        y: cy + r * rad.sin(),
    }
}

/// A circular arc drawn clockwise from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    /// Set when the sweep is more than 180 degrees
    pub large_arc: bool,
}

/// Arc between two angles on the circle around `(cx, cy)`.
///
/// A sweep of exactly 180 degrees takes the small-arc flag.
pub fn describe_arc(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64) -> ArcPath {
    ArcPath {
        start: polar_to_cartesian(cx, cy, r, start_angle),
        end: polar_to_cartesian(cx, cy, r, end_angle),
        radius: r,
        large_arc: end_angle - start_angle > 180.0,
    }
}

impl fmt::Display for ArcPath {
    /// SVG path data: `M sx sy A r r 0 large 1 ex ey`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} A {} {} 0 {} 1 {} {}",
            coord(self.start.x),
            coord(self.start.y),
            coord(self.radius),
            coord(self.radius),
            u8::from(self.large_arc),
            coord(self.end.x),
            coord(self.end.y),
        )
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn coord(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9
    }

    #[test]
    fn test_polar_cardinal_points() {
        assert!(close(polar_to_cartesian(100.0, 100.0, 50.0, 0.0), 100.0, 50.0));
        assert!(close(polar_to_cartesian(100.0, 100.0, 50.0, 90.0), 150.0, 100.0));
        assert!(close(polar_to_cartesian(100.0, 100.0, 50.0, 180.0), 100.0, 150.0));
        assert!(close(polar_to_cartesian(100.0, 100.0, 50.0, 270.0), 50.0, 100.0));
    }

    #[test]
    fn test_negative_radius_points_opposite() {
        assert!(close(polar_to_cartesian(0.0, 0.0, -20.0, 0.0), 0.0, 20.0));
    }

    #[test]
    fn test_large_arc_flag() {
        assert!(!describe_arc(160.0, 160.0, 130.0, 0.0, 90.0).large_arc);
        assert!(!describe_arc(160.0, 160.0, 130.0, 0.0, 180.0).large_arc);
        assert!(describe_arc(160.0, 160.0, 130.0, 0.0, 180.5).large_arc);
        assert!(describe_arc(160.0, 160.0, 130.0, 0.0, 270.0).large_arc);
    }

    #[test]
    fn test_arc_path_data() {
        let arc = describe_arc(160.0, 160.0, 130.0, 0.0, 90.0);
        assert_eq!(arc.to_string(), "M 160 30 A 130 130 0 0 1 290 160");

        let arc = describe_arc(160.0, 160.0, 130.0, 0.0, 270.0);
        assert_eq!(arc.to_string(), "M 160 30 A 130 130 0 1 1 30 160");
    }

    #[test]
    fn test_coord_formatting() {
        assert_eq!(coord(12.0), "12");
        assert_eq!(coord(12.5), "12.5");
        assert_eq!(coord(1.0 / 3.0), "0.333");
        assert_eq!(coord(-0.0001), "0");
        assert_eq!(coord(-4.25), "-4.25");
    }
}
