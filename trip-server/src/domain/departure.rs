//! Departure time selection.
//!
//! The UI offers "Leave Now" or "Choose Time". A chosen time is entered as a
//! date plus hour and minute dropdowns, all as text. This module turns that
//! UI state into a concrete local date-time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Error returned when a scheduled departure cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure time: {reason}")]
pub struct InvalidDeparture {
    reason: &'static str,
}

impl InvalidDeparture {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Which departure radio option is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartureChoice {
    /// Leave at the moment the request is built.
    #[default]
    Now,
    /// Leave at a user-chosen date and time.
    Future,
}

/// Hour dropdown values: `"00"` to `"23"`.
pub fn hour_options() -> Vec<String> {
    (0..24).map(|h| format!("{h:02}")).collect()
}

/// Minute dropdown values in five-minute steps: `"00"` to `"55"`.
pub fn minute_options() -> Vec<String> {
    (0..60).step_by(5).map(|m| format!("{m:02}")).collect()
}

/// Resolve the departure date-time from UI state.
///
/// A scheduled time is used only when `choice` is `Future` and the date,
/// hour and minute are all present and non-empty. In every other case the
/// trip leaves at `now`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_server::domain::{DepartureChoice, resolve_departure};
///
/// let now = NaiveDate::from_ymd_opt(2024, 5, 1)
///     .unwrap()
///     .and_hms_opt(7, 12, 0)
///     .unwrap();
///
/// let leave = resolve_departure(
///     DepartureChoice::Future,
///     Some("2024-05-02"),
///     Some("08"),
///     Some("30"),
///     now,
/// )
/// .unwrap();
/// assert_eq!(leave.to_string(), "2024-05-02 08:30:00");
///
/// // Incomplete selection falls back to now
/// let leave = resolve_departure(DepartureChoice::Future, Some("2024-05-02"), None, Some("30"), now)
///     .unwrap();
/// assert_eq!(leave, now);
/// ```
pub fn resolve_departure(
    choice: DepartureChoice,
    date: Option<&str>,
    hour: Option<&str>,
    minute: Option<&str>,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, InvalidDeparture> {
    match (choice, present(date), present(hour), present(minute)) {
        (DepartureChoice::Future, Some(date), Some(hour), Some(minute)) => {
            parse_scheduled(date, hour, minute)
        }
        _ => Ok(now),
    }
}

/// Trimmed text, or `None` if the field is absent or blank.
fn present(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Combine `YYYY-MM-DD`, `HH` and `MM` into a local date-time.
///
/// The date picker may send a full ISO timestamp; only the date part is used.
fn parse_scheduled(date: &str, hour: &str, minute: &str) -> Result<NaiveDateTime, InvalidDeparture> {
    let date_part = date.split('T').next().unwrap_or(date);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| InvalidDeparture::new("date must be YYYY-MM-DD"))?;

    let hour: u32 = hour
        .parse()
        .map_err(|_| InvalidDeparture::new("hour must be a number"))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| InvalidDeparture::new("minute must be a number"))?;

    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| InvalidDeparture::new("hour or minute out of range"))?;

    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(7, 12, 45)
            .unwrap()
    }

    #[test]
    fn now_ignores_scheduled_fields() {
        let leave = resolve_departure(
            DepartureChoice::Now,
            Some("2024-06-01"),
            Some("10"),
            Some("15"),
            now(),
        )
        .unwrap();
        assert_eq!(leave, now());
    }

    #[test]
    fn future_with_all_fields() {
        let leave = resolve_departure(
            DepartureChoice::Future,
            Some("2024-06-01"),
            Some("10"),
            Some("15"),
            now(),
        )
        .unwrap();
        assert_eq!(leave.to_string(), "2024-06-01 10:15:00");
    }

    #[test]
    fn future_accepts_iso_timestamp_date() {
        let leave = resolve_departure(
            DepartureChoice::Future,
            Some("2024-06-01T00:00:00"),
            Some("23"),
            Some("55"),
            now(),
        )
        .unwrap();
        assert_eq!(leave.to_string(), "2024-06-01 23:55:00");
    }

    #[test]
    fn future_missing_field_falls_back_to_now() {
        let cases = [
            (None, Some("10"), Some("15")),
            (Some("2024-06-01"), None, Some("15")),
            (Some("2024-06-01"), Some("10"), None),
            (Some("2024-06-01"), Some(""), Some("15")),
        ];
        for (date, hour, minute) in cases {
            let leave =
                resolve_departure(DepartureChoice::Future, date, hour, minute, now()).unwrap();
            assert_eq!(leave, now());
        }
    }

    #[test]
    fn scheduled_fields_are_trimmed() {
        assert_eq!(present(Some("  07 ")), Some("07"));
        assert_eq!(present(Some("   ")), None);
        assert_eq!(present(None), None);

        let leave = resolve_departure(
            DepartureChoice::Future,
            Some(" 2024-06-01 "),
            Some(" 07"),
            Some("05 "),
            now(),
        )
        .unwrap();
        assert_eq!(leave.to_string(), "2024-06-01 07:05:00");
    }

    #[test]
    fn future_malformed_fields_rejected() {
        assert!(
            resolve_departure(
                DepartureChoice::Future,
                Some("01/06/2024"),
                Some("10"),
                Some("15"),
                now()
            )
            .is_err()
        );
        assert!(
            resolve_departure(
                DepartureChoice::Future,
                Some("2024-06-01"),
                Some("24"),
                Some("15"),
                now()
            )
            .is_err()
        );
        assert!(
            resolve_departure(
                DepartureChoice::Future,
                Some("2024-06-01"),
                Some("ten"),
                Some("15"),
                now()
            )
            .is_err()
        );
    }

    #[test]
    fn dropdown_options() {
        let hours = hour_options();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours.first().map(String::as_str), Some("00"));
        assert_eq!(hours.last().map(String::as_str), Some("23"));

        let minutes = minute_options();
        assert_eq!(minutes.len(), 12);
        assert_eq!(minutes[1], "05");
        assert_eq!(minutes.last().map(String::as_str), Some("55"));
    }
}
