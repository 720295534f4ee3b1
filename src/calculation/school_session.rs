//! School session type for a date.
//!
//! The overlay is purely informational: it never reads or changes custody.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::SchoolCalendar;
use crate::models::{SchoolDayInfo, SchoolEventKind, SessionKind};

/// Label used for the recurring weekly early release.
pub const WEEKLY_EARLY_RELEASE: &str = "Weekly early release";

/// Determines the school session on `date`.
///
/// Resolution order:
/// 1. outside the school year (first term start to last term end) -> not in session
/// 2. Saturday or Sunday -> not in session, with the term if inside one
/// 3. a `no_school` event covers the date -> no school
/// 4. an `early_release` event covers the date -> early release
/// 5. a weekly early-out weekday -> early release
/// 6. otherwise a regular day
///
/// A weekday in the gap between two terms follows steps 3 to 6 with no
/// term reported. Close such gaps with a `no_school` event.
pub fn school_session_info(date: NaiveDate, calendar: &SchoolCalendar) -> SchoolDayInfo {
    let in_year = calendar
        .span()
        .is_some_and(|(start, end)| date >= start && date <= end);
    if !in_year {
        return SchoolDayInfo::not_in_session(None);
    }

    let term = calendar.term_on(date).map(|term| term.name.clone());
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return SchoolDayInfo::not_in_session(term);
    }

    let covering = move |kind: SchoolEventKind| {
        calendar
            .events
            .iter()
            .find(|event| event.kind == kind && event.covers(date))
    };
    let schedule = &calendar.daily_schedule;

    if let Some(event) = covering(SchoolEventKind::NoSchool) {
        return SchoolDayInfo {
            kind: SessionKind::NoSchool,
            start_time: None,
            end_time: None,
            event_name: Some(event.name.clone()),
            term,
        };
    }

    let early_release = covering(SchoolEventKind::EarlyRelease)
        .map(|event| event.name.clone())
        .or_else(|| {
            schedule
                .early_out_weekdays
                .contains(&date.weekday())
                .then(|| WEEKLY_EARLY_RELEASE.to_string())
        });
    if let Some(label) = early_release {
        return SchoolDayInfo {
            kind: SessionKind::EarlyRelease,
            start_time: Some(schedule.early_out_start),
            end_time: Some(schedule.early_out_end),
            event_name: Some(label),
            term,
        };
    }

    SchoolDayInfo {
        kind: SessionKind::Regular,
        start_time: Some(schedule.regular_start),
        end_time: Some(schedule.regular_end),
        event_name: None,
        term,
    }
}
