//! Time formatting for the countdown and statistics.

use chrono::Duration;

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a countdown value in seconds as MM:SS.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format_duration_mmss(Duration::seconds(i64::from(seconds)))
}

/// Format accumulated minutes as "Hh Mm".
#[must_use]
pub fn format_hours_minutes(minutes: u32) -> String {
    let d = Duration::minutes(i64::from(minutes));
    let hours = d.num_hours();
    let minutes = d.num_minutes() % 60;
    format!("{hours}h {minutes}m")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Fraction of the phase already elapsed (0.0 - 1.0).
#[must_use]
pub fn progress(remaining_seconds: u32, total_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 1.0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds);
    (f64::from(elapsed) / f64::from(total_seconds)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(299), "04:59");
        assert_eq!(format_clock(5), "00:05");
    }

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(0), "0h 0m");
        assert_eq!(format_hours_minutes(25), "0h 25m");
        assert_eq!(format_hours_minutes(100), "1h 40m");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(1500, 1500), 0.0);
        assert!((progress(750, 1500) - 0.5).abs() < f64::EPSILON);
        assert_eq!(progress(0, 1500), 1.0);
        assert_eq!(progress(0, 0), 1.0);
    }
}
