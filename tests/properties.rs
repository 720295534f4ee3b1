//! Property tests for the custody calculations.
//!
//! Dates are drawn from roughly twenty years either side of the weekend
//! reference date. Configurations are loaded from `config/default`.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use chrono_tz::Tz;
use proptest::prelude::*;

use custody_engine::calculation::{
    WeekdayRange, custody_status, is_alternating_weekend_user, next_transition, resolve_custody,
    school_session_info, week_summary,
};
use custody_engine::config::{
    ConfigLoader, ConfigSources, DisplaySettings, SchoolCalendar, ScheduleConfig,
};
use custody_engine::engine::CustodyEngine;
use custody_engine::models::{CustodyRule, Party};

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn schedule() -> ScheduleConfig {
    ConfigLoader::load_schedule("./config/default/schedule.yaml").unwrap()
}

fn school_calendar() -> SchoolCalendar {
    ConfigLoader::load_school_calendar("./config/default/school_calendar.yaml")
        .unwrap()
        .unwrap()
}

fn display() -> DisplaySettings {
    DisplaySettings::new("Alex", "Jordan", Tz::UTC)
}

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
}

/// A date within +/- 20 years of the reference date.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (-7305i64..=7305).prop_map(|offset| {
        if offset >= 0 {
            reference() + Days::new(offset as u64)
        } else {
            reference() - Days::new(offset.unsigned_abs())
        }
    })
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    (0usize..7).prop_map(|i| ALL_WEEKDAYS[i])
}

proptest! {
    #[test]
    fn prop_resolution_is_total_and_consistent(date in any_date()) {
        let config = schedule();
        let resolution = resolve_custody(date, &config);

        prop_assert_eq!(resolution.date, date);
        prop_assert_eq!(resolution.party, custody_status(date, &config));
    }

    #[test]
    fn prop_weekend_parity_alternates_weekly(date in any_date()) {
        let weekends = schedule().alternating_weekends;
        let next_week = date + Days::new(7);

        prop_assert_ne!(
            is_alternating_weekend_user(date, &weekends),
            is_alternating_weekend_user(next_week, &weekends)
        );

        let two_weeks = date + Days::new(14);
        prop_assert_eq!(
            is_alternating_weekend_user(date, &weekends),
            is_alternating_weekend_user(two_weeks, &weekends)
        );
    }

    #[test]
    fn prop_next_transition_changes_party(date in any_date()) {
        let config = schedule();
        let transition = next_transition(date, &config, &display());

        prop_assert!(!transition.fallback);
        prop_assert!(transition.date > date);
        prop_assert!((transition.date - date).num_days() <= 14);
        prop_assert_eq!(transition.party, Some(custody_status(transition.date, &config)));
        prop_assert_ne!(custody_status(transition.date, &config), custody_status(date, &config));

        // No change on any day in between
        let mut day = date + Days::new(1);
        while day < transition.date {
            prop_assert_eq!(custody_status(day, &config), custody_status(date, &config));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn prop_week_summary_flags_match_neighbours(date in any_date()) {
        let config = schedule();
        let days = week_summary(date, &config);

        prop_assert_eq!(days.len(), 7);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[0].dropoff, pair[0].party != pair[1].party);
            prop_assert_eq!(pair[1].pickup, pair[0].party != pair[1].party);
        }
    }

    #[test]
    fn prop_weekday_range_membership(start in any_weekday(), end in any_weekday(), day in any_weekday()) {
        let range = WeekdayRange::new(start, end);
        let s = start.num_days_from_monday();
        let e = end.num_days_from_monday();
        let d = day.num_days_from_monday();

        let expected = if s <= e { s <= d && d <= e } else { d >= s || d <= e };
        prop_assert_eq!(range.contains(day), expected);
        prop_assert_eq!(range.wraps(), s > e);

        let members = ALL_WEEKDAYS.iter().filter(|w| range.contains(**w)).count() as u32;
        prop_assert_eq!(members, range.day_count());
    }

    #[test]
    fn prop_school_overlay_is_independent(date in any_date()) {
        let config = schedule();
        let with_school = CustodyEngine::from_configs(
            Some(config.clone()),
            Some(school_calendar()),
            display(),
        );
        let without_school = CustodyEngine::from_configs(Some(config), None, display());

        prop_assert_eq!(
            with_school.custody_resolution(date),
            without_school.custody_resolution(date)
        );
        prop_assert_eq!(
            with_school.next_transition(date),
            without_school.next_transition(date)
        );
    }

    #[test]
    fn prop_queries_are_idempotent(date in any_date()) {
        let config = schedule();
        let calendar = school_calendar();

        prop_assert_eq!(resolve_custody(date, &config), resolve_custody(date, &config));
        prop_assert_eq!(week_summary(date, &config), week_summary(date, &config));
        prop_assert_eq!(
            school_session_info(date, &calendar),
            school_session_info(date, &calendar)
        );
    }
}

#[test]
fn test_every_day_resolves_for_forty_years() {
    let config = schedule();
    let start = NaiveDate::from_ymd_opt(2004, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2044, 1, 1).unwrap();

    let mut date = start;
    while date < end {
        let resolution = resolve_custody(date, &config);
        if let CustodyRule::Holiday { name } = &resolution.rule {
            assert!(
                custody_engine::calculation::is_known_holiday(name),
                "unknown holiday {} on {}",
                name,
                date
            );
        }
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn test_weekend_ranges_classify_every_weekday() {
    let linear = WeekdayRange::new(Weekday::Fri, Weekday::Sun);
    let wrapping = WeekdayRange::new(Weekday::Sat, Weekday::Mon);

    let linear_members: Vec<Weekday> = ALL_WEEKDAYS
        .iter()
        .copied()
        .filter(|w| linear.contains(*w))
        .collect();
    let wrapping_members: Vec<Weekday> = ALL_WEEKDAYS
        .iter()
        .copied()
        .filter(|w| wrapping.contains(*w))
        .collect();

    assert_eq!(linear_members, vec![Weekday::Fri, Weekday::Sat, Weekday::Sun]);
    assert_eq!(wrapping_members, vec![Weekday::Mon, Weekday::Sat, Weekday::Sun]);
}

#[test]
fn test_default_sources_load_both_documents() {
    let engine = CustodyEngine::open(ConfigSources::from_dir("./config/default"), display());
    let date = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();

    assert_eq!(date.weekday(), Weekday::Tue);
    assert!(engine.custody_status(date).is_ok());
    let session = engine.school_session_info(date).unwrap().unwrap();
    assert_eq!(session.event_name.as_deref(), Some("Spring Break"));
    // Mid-week default time is the co-parent's regardless of the school break
    assert_eq!(engine.custody_status(date).unwrap(), Party::Coparent);
}
