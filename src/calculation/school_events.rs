//! Upcoming school events.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::config::SchoolCalendar;
use crate::models::UpcomingSchoolEvent;

/// School events starting within `date ..= date + days_ahead`, plus ranged
/// events already under way on `date`.
///
/// Results are deduplicated by name and start date, sorted by start date,
/// and carry `days_until` floored at 0 for ongoing events. Milestones are
/// included.
pub fn upcoming_school_events(
    date: NaiveDate,
    days_ahead: u32,
    calendar: &SchoolCalendar,
) -> Vec<UpcomingSchoolEvent> {
    let window_end = date
        .checked_add_days(Days::new(u64::from(days_ahead)))
        .unwrap_or(NaiveDate::MAX);

    let mut seen = BTreeSet::new();
    let mut events: Vec<UpcomingSchoolEvent> = calendar
        .events
        .iter()
        .filter(|event| {
            let starts_in_window = event.date >= date && event.date <= window_end;
            starts_in_window || event.covers(date)
        })
        .filter(|&event| seen.insert((event.name.as_str(), event.date)))
        .map(|event| UpcomingSchoolEvent {
            name: event.name.clone(),
            kind: event.kind,
            date: event.date,
            end_date: event.end_date,
            days_until: (event.date - date).num_days().max(0),
        })
        .collect();

    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    events
}
