//! Minute arithmetic and half-open intervals

/// Convert an "HH:MM" string to minutes since midnight.
///
/// Empty input, or input without a colon, yields 0. Components that do not
/// parse count as 0 as well, so malformed times degrade to midnight instead of
/// failing.
pub fn time_to_minutes(s: &str) -> u32 {
    let Some((hours, minutes)) = s.split_once(':') else {
        return 0;
    };
    let hours = parse_component(hours).unwrap_or(0);
    let minutes = parse_component(minutes).unwrap_or(0);
    hours.saturating_mul(60).saturating_add(minutes)
}

/// Hour part of an "HH:MM" string, if it parses.
pub fn hour_component(s: &str) -> Option<u32> {
    parse_component(s.split(':').next()?)
}

/// Minute part of an "HH:MM" string, if it parses.
pub fn minute_component(s: &str) -> Option<u32> {
    let (_, minutes) = s.split_once(':')?;
    parse_component(minutes)
}

fn parse_component(part: &str) -> Option<u32> {
    part.trim().parse().ok()
}

/// Strictly parse a 24-hour "H:MM" or "HH:MM" time into `(hour, minute)`.
pub fn parse_clock_time(s: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = s.trim().split_once(':')?;
    let digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    if !digits(hours) || hours.len() > 2 || !digits(minutes) || minutes.len() != 2 {
        return None;
    }
    let hour: u32 = hours.parse().ok()?;
    let minute: u32 = minutes.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// True iff `[a_start, a_end)` and `[b_start, b_end)` share at least one instant.
pub fn intervals_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && a_end > b_start
}

/// A half-open `[start, end)` span in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build from a pair of "HH:MM" strings using the lenient parser.
    pub fn from_times(start: &str, end: &str) -> Self {
        Self::new(time_to_minutes(start), time_to_minutes(end))
    }

    pub fn duration(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        intervals_overlap(self.start, self.end, other.start, other.end)
    }

    pub fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("08:30"), 510);
        assert_eq!(time_to_minutes("9:05"), 545);
        assert_eq!(time_to_minutes("00:00"), 0);
        assert_eq!(time_to_minutes("23:59"), 1439);
    }

    #[test]
    fn test_time_to_minutes_degrades_to_zero() {
        assert_eq!(time_to_minutes(""), 0);
        assert_eq!(time_to_minutes("0830"), 0);
        assert_eq!(time_to_minutes("ab:cd"), 0);
        assert_eq!(time_to_minutes("08:"), 480);
    }

    #[test]
    fn test_time_to_minutes_saturates() {
        assert_eq!(time_to_minutes("4294967295:00"), u32::MAX);
    }

    #[test]
    fn test_components() {
        assert_eq!(hour_component("08:45"), Some(8));
        assert_eq!(minute_component("08:45"), Some(45));
        assert_eq!(hour_component(""), None);
        assert_eq!(minute_component("0845"), None);
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("08:05"), Some((8, 5)));
        assert_eq!(parse_clock_time("9:05"), Some((9, 5)));
        assert_eq!(parse_clock_time(" 23:59 "), Some((23, 59)));
        assert_eq!(parse_clock_time("24:00"), None);
        assert_eq!(parse_clock_time("08:60"), None);
        assert_eq!(parse_clock_time("08:5"), None);
        assert_eq!(parse_clock_time("123:00"), None);
        assert_eq!(parse_clock_time("-1:00"), None);
        assert_eq!(parse_clock_time("0800"), None);
    }

    #[test]
    fn test_overlap_is_half_open() {
        assert!(!intervals_overlap(480, 490, 490, 500));
        assert!(!intervals_overlap(490, 500, 480, 490));
        assert!(intervals_overlap(480, 490, 485, 495));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let spans = [(0, 10), (5, 15), (10, 20), (2, 3), (0, 60), (59, 60)];
        for &(a0, a1) in &spans {
            for &(b0, b1) in &spans {
                assert_eq!(
                    intervals_overlap(a0, a1, b0, b1),
                    intervals_overlap(b0, b1, a0, a1),
                    "asymmetric for [{a0},{a1}) vs [{b0},{b1})"
                );
            }
        }
    }

    #[test]
    fn test_interval_contains_excludes_end() {
        let span = Interval::from_times("08:00", "08:10");
        assert!(span.contains(480));
        assert!(span.contains(489));
        assert!(!span.contains(490));
        assert_eq!(span.duration(), 10);
    }
}
