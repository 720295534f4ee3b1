//! Seven-day custody summary with pickup and dropoff annotations.

use chrono::{Datelike, Days, NaiveDate};

use crate::config::ScheduleConfig;
use crate::models::DaySummary;

use super::custody_status::custody_status;

/// Number of days in a week summary.
pub const WEEK_SUMMARY_DAYS: u64 = 7;

/// Summarizes custody for the seven days starting at `date`.
///
/// Each day is marked `pickup` when its party differs from the previous
/// day's and `dropoff` when it differs from the next day's. The days just
/// outside the window are consulted so the first and last entries are
/// annotated correctly. A day with both flags is a single-day window with
/// the other party on either side.
pub fn week_summary(date: NaiveDate, config: &ScheduleConfig) -> Vec<DaySummary> {
    let days: Vec<NaiveDate> = (0..WEEK_SUMMARY_DAYS)
        .map_while(|offset| date.checked_add_days(Days::new(offset)))
        .collect();

    days.iter()
        .map(|&day| {
            let party = custody_status(day, config);
            let previous = day.pred_opt().map(|d| custody_status(d, config));
            let next = day.succ_opt().map(|d| custody_status(d, config));
            DaySummary {
                date: day,
                weekday: day.weekday(),
                party,
                pickup: previous.is_some_and(|p| p != party),
                dropoff: next.is_some_and(|n| n != party),
            }
        })
        .collect()
}
