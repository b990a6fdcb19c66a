/// Time model — wall-clock fields, formatting, and the name/color tables
/// for the date and weekday labels.
use chrono::{Datelike, Local, Timelike};

/// Wall-clock fields read once per paint pass.
#[derive(Debug, Clone, Copy)]
pub struct TimeFields {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// Second, 0-59
    pub second: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Month index, 0 = January
    pub month0: u32,
    /// Weekday index, 0 = Sunday
    pub weekday0: u32,
}

/// Capability for reading the current time.
/// The renderer never touches the system clock directly, so tests can
/// inject fixed fields.
pub trait TimeSource: Send {
    fn now(&self) -> TimeFields;
}

/// System clock via chrono's local timezone.
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> TimeFields {
        let now = Local::now();
        TimeFields {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            day: now.day(),
            month0: now.month0(),
            weekday0: now.weekday().num_days_from_sunday(),
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Label color per weekday: darkslategray, darkorange, crimson, blue,
/// green, deeppink, navy.
const WEEKDAY_COLORS: [(u8, u8, u8); 7] = [
    (47, 79, 79),
    (255, 140, 0),
    (220, 20, 60),
    (0, 0, 255),
    (0, 128, 0),
    (255, 20, 147),
    (0, 0, 128),
];

/// Zero-padded "HH:MM:SS"
pub fn format_hms(t: &TimeFields) -> String {
    format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second)
}

pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0 as usize % MONTH_NAMES.len()]
}

pub fn weekday_name(weekday0: u32) -> &'static str {
    WEEKDAY_NAMES[weekday0 as usize % WEEKDAY_NAMES.len()]
}

pub fn weekday_color(weekday0: u32) -> (u8, u8, u8) {
    WEEKDAY_COLORS[weekday0 as usize % WEEKDAY_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms_zero_pads() {
        let t = TimeFields {
            hour: 3,
            minute: 7,
            second: 9,
            day: 1,
            month0: 0,
            weekday0: 0,
        };
        assert_eq!(format_hms(&t), "03:07:09");
    }

    #[test]
    fn test_format_hms_no_padding_needed() {
        let t = TimeFields {
            hour: 23,
            minute: 59,
            second: 58,
            day: 31,
            month0: 11,
            weekday0: 6,
        };
        assert_eq!(format_hms(&t), "23:59:58");
    }

    #[test]
    fn test_month_name_mapping() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
    }

    #[test]
    fn test_weekday_name_mapping() {
        assert_eq!(weekday_name(0), "Sunday");
        assert_eq!(weekday_name(6), "Saturday");
    }

    #[test]
    fn test_weekday_color_is_stable() {
        for day in 0..7 {
            assert_eq!(weekday_color(day), weekday_color(day));
        }
        assert_eq!(weekday_color(0), (47, 79, 79));
        assert_eq!(weekday_color(2), (220, 20, 60));
        assert_eq!(weekday_color(6), (0, 0, 128));
    }
}
