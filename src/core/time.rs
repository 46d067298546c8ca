//! Time helpers shared by the layout and its children.

use chrono::NaiveDateTime;

/// Whether `date` lies strictly after `now`.
pub fn is_future_time(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    date > now
}

/// Whether a program spanning `since..till` is on air at `now`.
pub fn is_live(since: NaiveDateTime, till: NaiveDateTime, now: NaiveDateTime) -> bool {
    since <= now && now < till
}

/// Horizontal distance in cells between two instants at the given hour width.
///
/// Negative when `to` precedes `from`.
pub fn position_x(from: NaiveDateTime, to: NaiveDateTime, hour_width: u16) -> i64 {
    (to - from).num_minutes() * i64::from(hour_width) / 60
}

/// Clock time of `date`: `HH:MM`, or `H:MM AM` on the 12-hour clock.
pub fn format_time(date: NaiveDateTime, is_base_time_format: bool) -> String {
    if is_base_time_format {
        date.format("%-I:%M %p").to_string()
    } else {
        date.format("%H:%M").to_string()
    }
}

/// `since - till` in the selected clock format.
pub fn format_range(since: NaiveDateTime, till: NaiveDateTime, is_base_time_format: bool) -> String {
    format!(
        "{} - {}",
        format_time(since, is_base_time_format),
        format_time(till, is_base_time_format)
    )
}

/// Timeline label for an hour of day (`0..24`).
pub fn format_hour(hour: u16, is_base_time_format: bool) -> String {
    let hour = hour % 24;
    if is_base_time_format {
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let twelve = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{twelve} {suffix}")
    } else {
        format!("{hour:02}:00")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 10, 18)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_is_future_time_is_strict() {
        assert!(is_future_time(at(12, 1), at(12, 0)));
        assert!(!is_future_time(at(12, 0), at(12, 0)));
        assert!(!is_future_time(at(11, 0), at(12, 0)));
    }

    #[test]
    fn test_is_live_half_open() {
        assert!(is_live(at(10, 0), at(11, 0), at(10, 0)));
        assert!(is_live(at(10, 0), at(11, 0), at(10, 59)));
        assert!(!is_live(at(10, 0), at(11, 0), at(11, 0)));
        assert!(!is_live(at(10, 0), at(11, 0), at(9, 59)));
    }

    #[test]
    fn test_position_x_scales_minutes() {
        assert_eq!(position_x(at(0, 0), at(1, 30), 12), 18);
        assert_eq!(position_x(at(0, 0), at(0, 5), 12), 1);
        assert_eq!(position_x(at(1, 0), at(0, 0), 12), -12);
    }

    #[test]
    fn test_format_time_24_and_12_hour() {
        assert_eq!(format_time(at(13, 5), false), "13:05");
        assert_eq!(format_time(at(13, 5), true), "1:05 PM");
        assert_eq!(format_time(at(0, 30), true), "12:30 AM");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(at(9, 0), at(10, 30), false), "09:00 - 10:30");
    }

    #[test]
    fn test_format_hour_wraps_day() {
        assert_eq!(format_hour(0, false), "00:00");
        assert_eq!(format_hour(25, false), "01:00");
        assert_eq!(format_hour(0, true), "12 AM");
        assert_eq!(format_hour(12, true), "12 PM");
        assert_eq!(format_hour(18, true), "6 PM");
    }
}
