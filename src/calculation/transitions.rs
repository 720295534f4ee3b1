//! Next custody transition.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::config::{DisplaySettings, ScheduleConfig};
use crate::format::long_date;
use crate::models::{CustodyTransition, Party};

use super::custody_status::custody_status;

/// How many days ahead [`next_transition`] scans for a change of party.
///
/// Any 14-day window contains each weekend weekday once in each parity, so a
/// validated schedule always changes hands within it.
pub const TRANSITION_SCAN_DAYS: u64 = 14;

/// Finds the next date after `date` on which the assigned party changes.
///
/// Scans `date + 1 ..= date + 14`. If nothing changes in that window the
/// result is the next occurrence of the alternating-weekend pickup weekday,
/// labeled "next weekend" with `fallback` set; callers should treat that
/// result as lower confidence.
pub fn next_transition(
    date: NaiveDate,
    config: &ScheduleConfig,
    display: &DisplaySettings,
) -> CustodyTransition {
    let current = custody_status(date, config);
    match scan_for_change(date, current, TRANSITION_SCAN_DAYS, |day| {
        custody_status(day, config)
    }) {
        Some((day, party)) => CustodyTransition {
            date: day,
            party: Some(party),
            description: format!(
                "Children go to {} on {}",
                display.name_of(party),
                long_date(day)
            ),
            fallback: false,
        },
        None => fallback_transition(date, config.alternating_weekends.pickup_weekday),
    }
}

/// Returns the first day in `date + 1 ..= date + horizon` whose party, as
/// reported by `status`, differs from `current`.
pub fn scan_for_change<F>(
    date: NaiveDate,
    current: Party,
    horizon: u64,
    status: F,
) -> Option<(NaiveDate, Party)>
where
    F: Fn(NaiveDate) -> Party,
{
    (1..=horizon)
        .map_while(|offset| date.checked_add_days(Days::new(offset)))
        .map(|day| (day, status(day)))
        .find(|(_, party)| *party != current)
}

/// The lower-confidence transition: the next `pickup_weekday` strictly after
/// `date`.
pub fn fallback_transition(date: NaiveDate, pickup_weekday: Weekday) -> CustodyTransition {
    let next_pickup = (1..=7)
        .map_while(|offset| date.checked_add_days(Days::new(offset)))
        .find(|day| day.weekday() == pickup_weekday)
        .unwrap_or(date);

    CustodyTransition {
        date: next_pickup,
        party: None,
        description: format!("Next weekend: {}", long_date(next_pickup)),
        fallback: true,
    }
}
