//! Holiday date computation.
//!
//! This module computes the calendar date of each holiday in the fixed
//! statutory set for any year: fixed dates, "Nth weekday of the month"
//! dates, and "last weekday of the month" dates.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// How a holiday's date is determined in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// The same month and day every year.
    Fixed {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// The `n`th occurrence of `weekday` in `month` (1-based).
    NthWeekday {
        /// Month (1-12).
        month: u32,
        /// The weekday.
        weekday: Weekday,
        /// Occurrence, starting at 1.
        n: u32,
    },
    /// The last occurrence of `weekday` in `month`.
    LastWeekday {
        /// Month (1-12).
        month: u32,
        /// The weekday.
        weekday: Weekday,
    },
}

impl HolidayRule {
    /// The date of this rule in `year`, or `None` if it is not representable.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            HolidayRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            HolidayRule::NthWeekday { month, weekday, n } => {
                nth_weekday_of_month(year, month, weekday, n)
            }
            HolidayRule::LastWeekday { month, weekday } => {
                last_weekday_of_month(year, month, weekday)
            }
        }
    }
}

/// A holiday in the engine's fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDefinition {
    /// Configuration name, used in holiday rules.
    pub name: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Date rule.
    pub rule: HolidayRule,
    /// The rule only approximates a locally varying date.
    pub approximate: bool,
}

/// The statutory holiday set.
///
/// `spring_break` and `fall_break` approximate dates that vary by district
/// and are flagged `approximate`.
pub const HOLIDAYS: &[HolidayDefinition] = &[
    HolidayDefinition {
        name: "new_years_day",
        display_name: "New Year's Day",
        rule: HolidayRule::Fixed { month: 1, day: 1 },
        approximate: false,
    },
    HolidayDefinition {
        name: "mlk_day",
        display_name: "Martin Luther King Jr. Day",
        rule: HolidayRule::NthWeekday {
            month: 1,
            weekday: Weekday::Mon,
            n: 3,
        },
        approximate: false,
    },
    HolidayDefinition {
        name: "presidents_day",
        display_name: "Presidents' Day",
        rule: HolidayRule::NthWeekday {
            month: 2,
            weekday: Weekday::Mon,
            n: 3,
        },
        approximate: false,
    },
    HolidayDefinition {
        name: "spring_break",
        display_name: "Spring Break",
        rule: HolidayRule::NthWeekday {
            month: 3,
            weekday: Weekday::Mon,
            n: 3,
        },
        approximate: true,
    },
    HolidayDefinition {
        name: "mothers_day",
        display_name: "Mother's Day",
        rule: HolidayRule::NthWeekday {
            month: 5,
            weekday: Weekday::Sun,
            n: 2,
        },
        approximate: false,
    },
    HolidayDefinition {
        name: "memorial_day",
        display_name: "Memorial Day",
        rule: HolidayRule::LastWeekday {
            month: 5,
            weekday: Weekday::Mon,
        },
        approximate: false,
    },
    HolidayDefinition {
        name: "fathers_day",
        display_name: "Father's Day",
        rule: HolidayRule::NthWeekday {
            month: 6,
            weekday: Weekday::Sun,
            n: 3,
        },
        approximate: false,
    },
    HolidayDefinition {
        name: "independence_day",
        display_name: "Independence Day",
        rule: HolidayRule::Fixed { month: 7, day: 4 },
        approximate: false,
    },
    HolidayDefinition {
        name: "labor_day",
        display_name: "Labor Day",
        rule: HolidayRule::NthWeekday {
            month: 9,
            weekday: Weekday::Mon,
            n: 1,
        },
        approximate: false,
    },
    HolidayDefinition {
        name: "fall_break",
        display_name: "Fall Break",
        rule: HolidayRule::NthWeekday {
            month: 10,
            weekday: Weekday::Mon,
            n: 2,
        },
        approximate: true,
    },
    HolidayDefinition {
        name: "halloween",
        display_name: "Halloween",
        rule: HolidayRule::Fixed { month: 10, day: 31 },
        approximate: false,
    },
    HolidayDefinition {
        name: "thanksgiving",
        display_name: "Thanksgiving",
        rule: HolidayRule::NthWeekday {
            month: 11,
            weekday: Weekday::Thu,
            n: 4,
        },
        approximate: false,
    },
    HolidayDefinition {
        name: "christmas_eve",
        display_name: "Christmas Eve",
        rule: HolidayRule::Fixed { month: 12, day: 24 },
        approximate: false,
    },
    HolidayDefinition {
        name: "christmas_day",
        display_name: "Christmas Day",
        rule: HolidayRule::Fixed { month: 12, day: 25 },
        approximate: false,
    },
];

/// Looks up a holiday definition by configuration name.
pub fn find_holiday(name: &str) -> Option<&'static HolidayDefinition> {
    HOLIDAYS.iter().find(|holiday| holiday.name == name)
}

/// Returns `true` if the engine computes a holiday named `name`.
pub fn is_known_holiday(name: &str) -> bool {
    find_holiday(name).is_some()
}

/// Number of days from `from` forward to the next `to` (0-6).
fn days_forward(from: Weekday, to: Weekday) -> u64 {
    u64::from((7 + to.num_days_from_monday() - from.num_days_from_monday()) % 7)
}

/// The `n`th `weekday` of `month` in `year` (1-based).
///
/// Finds the first occurrence from the actual weekday of the 1st, then adds
/// `(n - 1) * 7` days. Returns `None` for `n == 0`, for an occurrence that
/// falls outside the month, or for an unrepresentable year.
///
/// # Example
///
/// ```
/// use custody_engine::calculation::nth_weekday_of_month;
/// use chrono::{NaiveDate, Weekday};
///
/// // Martin Luther King Jr. Day 2024: third Monday of January
/// assert_eq!(
///     nth_weekday_of_month(2024, 1, Weekday::Mon, 3),
///     NaiveDate::from_ymd_opt(2024, 1, 15)
/// );
/// ```
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = days_forward(first.weekday(), weekday) + u64::from(n - 1) * 7;
    let date = first.checked_add_days(Days::new(offset))?;
    (date.month() == month).then_some(date)
}

/// The last `weekday` of `month` in `year`.
///
/// Starts from the month's last calendar day and steps back 0-6 days.
///
/// # Example
///
/// ```
/// use custody_engine::calculation::last_weekday_of_month;
/// use chrono::{NaiveDate, Weekday};
///
/// // Memorial Day 2024: last Monday of May
/// assert_eq!(
///     last_weekday_of_month(2024, 5, Weekday::Mon),
///     NaiveDate::from_ymd_opt(2024, 5, 27)
/// );
/// ```
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    last.checked_sub_days(Days::new(days_forward(weekday, last.weekday())))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Computes the date of every holiday in `year`, keyed by name.
///
/// The map iterates in ascending name order; that order is the tie-break
/// when two holidays share a date. Holidays whose date cannot be
/// represented in `year` are omitted.
///
/// # Example
///
/// ```
/// use custody_engine::calculation::holiday_dates_for_year;
/// use chrono::NaiveDate;
///
/// let dates = holiday_dates_for_year(2024);
/// assert_eq!(dates["thanksgiving"], NaiveDate::from_ymd_opt(2024, 11, 28).unwrap());
/// ```
pub fn holiday_dates_for_year(year: i32) -> BTreeMap<&'static str, NaiveDate> {
    HOLIDAYS
        .iter()
        .filter_map(|holiday| holiday.rule.date_in(year).map(|date| (holiday.name, date)))
        .collect()
}
