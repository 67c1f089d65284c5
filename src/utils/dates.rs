use chrono::{Datelike, Duration, Local, NaiveDate};

/// Weekday names indexed by days-since-Sunday, as shown on the weekly chart.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Single-letter labels for a Monday-start calendar row.
pub const WEEK_ROW_LABELS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// The current calendar day in the observer's local time zone. All date
/// math in the crate is calendar-day granular; timestamps never leak in.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday of the week containing `date`. Sunday maps to the previous Monday.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}
