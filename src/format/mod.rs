//! Text rendering helpers.
//!
//! Dates and times are rendered in the household's local calendar; the
//! engine never converts them, it only formats what the caller supplied.

mod context;

pub use context::{
    CONTEXT_HOLIDAY_DAYS, CONTEXT_SCHOOL_EVENT_DAYS, ContextFormatter, ScheduleContext,
};

use chrono::{NaiveDate, NaiveTime};

/// Formats a date as weekday, month and day, e.g. "Wednesday, January 10".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// Formats a time of day on a 12-hour clock, e.g. "3:15 PM".
pub fn clock_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Describes a day offset relative to today: "today", "tomorrow", or "in N days".
pub fn relative_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {} days", n),
    }
}
