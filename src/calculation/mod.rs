//! Calculation logic for the Custody Schedule Engine.
//!
//! This module contains the pure functions behind every query: holiday date
//! computation, holiday assignment by override and year parity, custody
//! status resolution with its cyclic weekend range, next-transition search,
//! week summaries, holiday lookahead, and the school calendar overlay.
//! Every function takes the configuration and the query date explicitly.

mod custody_status;
mod holiday_assignment;
mod holiday_dates;
mod school_events;
mod school_session;
mod transitions;
mod upcoming_holidays;
mod week_summary;
mod weekday_range;

pub use custody_status::{
    custody_status, is_alternating_weekend_user, resolve_custody, weekend_party,
};
pub use holiday_assignment::{assign_holiday, first_holiday_on, holiday_assignments_for_year};
pub use holiday_dates::{
    HOLIDAYS, HolidayDefinition, HolidayRule, find_holiday, holiday_dates_for_year,
    is_known_holiday, last_weekday_of_month, nth_weekday_of_month,
};
pub use school_events::upcoming_school_events;
pub use school_session::{WEEKLY_EARLY_RELEASE, school_session_info};
pub use transitions::{
    TRANSITION_SCAN_DAYS, fallback_transition, next_transition, scan_for_change,
};
pub use upcoming_holidays::upcoming_holidays;
pub use week_summary::{WEEK_SUMMARY_DAYS, week_summary};
pub use weekday_range::WeekdayRange;

#[cfg(test)]
pub(crate) mod test_support {
    //! Configuration fixtures matching `config/default`.

    use chrono::{NaiveDate, NaiveTime, Weekday};

    use crate::config::{
        AlternatingWeekends, DailySchedule, HolidayRules, SchoolCalendar, SchoolEvent,
        SchoolTerm, ScheduleConfig, WeekdayOvernight,
    };
    use crate::models::{Party, SchoolEventKind};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn names(list: &[&str]) -> std::collections::BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    pub(crate) fn sample_schedule() -> ScheduleConfig {
        ScheduleConfig {
            weekday_overnight: WeekdayOvernight {
                party: Party::User,
                pickup_weekday: Weekday::Wed,
                dropoff_weekday: Weekday::Thu,
            },
            alternating_weekends: AlternatingWeekends {
                reference_date: date("2024-01-05"),
                pickup_weekday: Weekday::Fri,
                dropoff_weekday: Weekday::Sun,
            },
            holiday_rules: HolidayRules {
                even_year_user: names(&[
                    "new_years_day",
                    "presidents_day",
                    "memorial_day",
                    "labor_day",
                    "halloween",
                    "thanksgiving",
                    "christmas_eve",
                ]),
                odd_year_user: names(&[
                    "mlk_day",
                    "spring_break",
                    "independence_day",
                    "fall_break",
                    "christmas_day",
                ]),
                always_user: names(&["mothers_day"]),
                always_coparent: names(&["fathers_day"]),
            },
        }
    }

    fn event(start: &str, end: Option<&str>, kind: SchoolEventKind, name: &str) -> SchoolEvent {
        SchoolEvent {
            date: date(start),
            end_date: end.map(date),
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn sample_school_calendar() -> SchoolCalendar {
        SchoolCalendar {
            terms: vec![
                SchoolTerm {
                    name: "Fall Semester".to_string(),
                    start: date("2025-08-27"),
                    end: date("2026-01-23"),
                },
                SchoolTerm {
                    name: "Spring Semester".to_string(),
                    start: date("2026-01-26"),
                    end: date("2026-06-17"),
                },
            ],
            events: vec![
                event("2025-09-01", None, SchoolEventKind::NoSchool, "Labor Day"),
                event(
                    "2025-10-10",
                    None,
                    SchoolEventKind::EarlyRelease,
                    "Parent-Teacher Conferences",
                ),
                event(
                    "2025-11-26",
                    Some("2025-11-28"),
                    SchoolEventKind::NoSchool,
                    "Thanksgiving Break",
                ),
                event(
                    "2025-12-22",
                    Some("2026-01-02"),
                    SchoolEventKind::NoSchool,
                    "Winter Break",
                ),
                event(
                    "2026-01-23",
                    None,
                    SchoolEventKind::Milestone,
                    "End of First Semester",
                ),
                event(
                    "2026-03-16",
                    Some("2026-03-20"),
                    SchoolEventKind::NoSchool,
                    "Spring Break",
                ),
                event(
                    "2026-06-17",
                    None,
                    SchoolEventKind::EarlyRelease,
                    "Last Day of School",
                ),
            ],
            daily_schedule: DailySchedule {
                regular_start: NaiveTime::from_hms_opt(8, 45, 0).unwrap(),
                regular_end: NaiveTime::from_hms_opt(15, 15, 0).unwrap(),
                early_out_start: NaiveTime::from_hms_opt(8, 45, 0).unwrap(),
                early_out_end: NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
                early_out_weekdays: vec![Weekday::Wed],
            },
        }
    }
}
