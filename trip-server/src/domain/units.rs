//! Unit conversion and display formatting for trip summaries.

use chrono::Duration;

/// Miles per meter.
pub const MILES_PER_METER: f64 = 0.000621371;

/// Convert meters to statute miles.
///
/// # Examples
///
/// ```
/// use trip_server::domain::meters_to_miles;
///
/// assert!((meters_to_miles(1609.34) - 1.0).abs() < 0.01);
/// ```
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_PER_METER
}

/// Miles with two decimal places, e.g. `"3.14 miles"`.
pub fn format_miles(meters: f64) -> String {
    format!("{:.2} miles", meters_to_miles(meters))
}

/// Split a duration into whole hours, minutes and seconds.
///
/// Sub-second remainders are dropped. Negative durations clamp to zero.
pub fn hms(duration: Duration) -> (i64, i64, i64) {
    let secs = duration.num_seconds().max(0);
    (secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// `"1 hours, 5 minutes, and 30 seconds"`.
pub fn format_duration_long(duration: Duration) -> String {
    let (h, m, s) = hms(duration);
    format!("{h} hours, {m} minutes, and {s} seconds")
}

/// `"12 minutes, 30 seconds"`, folding hours into minutes.
pub fn format_minutes_seconds(duration: Duration) -> String {
    let secs = duration.num_seconds().max(0);
    format!("{} minutes, {} seconds", secs / 60, secs % 60)
}

/// Clock form `"H:MM:SS"`, e.g. `"0:12:30"`.
pub fn format_clock(duration: Duration) -> String {
    let (h, m, s) = hms(duration);
    format!("{h}:{m:02}:{s:02}")
}

/// Duration from fractional minutes, to the millisecond.
///
/// `None` if `minutes` is not finite or falls outside chrono's range.
pub fn minutes_f64(minutes: f64) -> Option<Duration> {
    millis_f64(minutes * 60_000.0)
}

/// Duration from fractional seconds, to the millisecond.
///
/// `None` if `seconds` is not finite or falls outside chrono's range.
pub fn seconds_f64(seconds: f64) -> Option<Duration> {
    millis_f64(seconds * 1000.0)
}

fn millis_f64(millis: f64) -> Option<Duration> {
    let millis = millis.round();
    // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(millis as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_mile() {
        assert!((meters_to_miles(1609.34) - 1.0).abs() < 0.01);
        assert_eq!(meters_to_miles(0.0), 0.0);
    }

    #[test]
    fn miles_two_decimals() {
        assert_eq!(format_miles(1609.34), "1.00 miles");
        assert_eq!(format_miles(5000.0), "3.11 miles");
    }

    #[test]
    fn hms_floors() {
        assert_eq!(hms(Duration::seconds(3725)), (1, 2, 5));
        assert_eq!(hms(Duration::milliseconds(59_999)), (0, 0, 59));
        assert_eq!(hms(Duration::seconds(-5)), (0, 0, 0));
    }

    #[test]
    fn long_format() {
        assert_eq!(
            format_duration_long(Duration::seconds(3930)),
            "1 hours, 5 minutes, and 30 seconds"
        );
        assert_eq!(
            format_duration_long(Duration::seconds(90)),
            "0 hours, 1 minutes, and 30 seconds"
        );
    }

    #[test]
    fn minutes_seconds_format() {
        assert_eq!(
            format_minutes_seconds(Duration::milliseconds(450_500)),
            "7 minutes, 30 seconds"
        );
        assert_eq!(
            format_minutes_seconds(Duration::seconds(3725)),
            "62 minutes, 5 seconds"
        );
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(Duration::seconds(750)), "0:12:30");
        assert_eq!(format_clock(Duration::seconds(3600 + 61)), "1:01:01");
    }

    #[test]
    fn fractional_conversions() {
        assert_eq!(minutes_f64(7.5), Some(Duration::seconds(450)));
        assert_eq!(seconds_f64(1.2345), Some(Duration::milliseconds(1235)));
    }

    #[test]
    fn fractional_conversions_reject_out_of_range() {
        assert_eq!(seconds_f64(-1e300), None);
        assert_eq!(seconds_f64(1e300), None);
        assert_eq!(seconds_f64(f64::NAN), None);
        assert_eq!(minutes_f64(f64::INFINITY), None);
        // Just inside chrono's range in whole seconds
        assert!(seconds_f64(9.0e15).is_some());
    }
}
