//! Custody status resolution for a single date.
//!
//! Rules are evaluated in priority order against the calendar date:
//! holiday, alternating weekend range, weekday overnight, then default time.

use chrono::{Datelike, NaiveDate};

use crate::config::{AlternatingWeekends, ScheduleConfig};
use crate::models::{CustodyResolution, CustodyRule, Party};

use super::holiday_assignment::{first_holiday_on, holiday_assignments_for_year};

/// Resolves who has the children on `date` and which rule decided it.
///
/// # Example
///
/// ```no_run
/// use custody_engine::calculation::resolve_custody;
/// use custody_engine::config::ConfigLoader;
/// use custody_engine::models::CustodyRule;
/// use chrono::NaiveDate;
///
/// let config = ConfigLoader::load_schedule("./config/default/schedule.yaml")?;
/// let thanksgiving = NaiveDate::from_ymd_opt(2024, 11, 28).unwrap();
/// let resolution = resolve_custody(thanksgiving, &config);
/// assert!(matches!(resolution.rule, CustodyRule::Holiday { .. }));
/// # Ok::<(), custody_engine::error::EngineError>(())
/// ```
pub fn resolve_custody(date: NaiveDate, config: &ScheduleConfig) -> CustodyResolution {
    let assignments = holiday_assignments_for_year(date.year(), &config.holiday_rules);
    if let Some(holiday) = first_holiday_on(date, &assignments) {
        return CustodyResolution {
            date,
            party: holiday.party,
            rule: CustodyRule::Holiday {
                name: holiday.name.clone(),
            },
        };
    }

    let weekday = date.weekday();
    let weekends = &config.alternating_weekends;
    if weekends.range().contains(weekday) {
        return CustodyResolution {
            date,
            party: weekend_party(date, weekends),
            rule: CustodyRule::AlternatingWeekend,
        };
    }

    let overnight = &config.weekday_overnight;
    if overnight.covers(weekday) {
        return CustodyResolution {
            date,
            party: overnight.party,
            rule: CustodyRule::WeekdayOvernight,
        };
    }

    CustodyResolution {
        date,
        party: overnight.default_party(),
        rule: CustodyRule::Default,
    }
}

/// The party with the children on `date`.
pub fn custody_status(date: NaiveDate, config: &ScheduleConfig) -> Party {
    resolve_custody(date, config).party
}

/// Returns `true` if `date` falls in one of the user's alternating weeks.
///
/// Weeks are counted from the reference date with floor division, so dates
/// before the reference keep a clean two-week alternation.
pub fn is_alternating_weekend_user(date: NaiveDate, weekends: &AlternatingWeekends) -> bool {
    let days = (date - weekends.reference_date).num_days();
    days.div_euclid(7).rem_euclid(2) == 0
}

/// The party holding the alternating weekend that contains `date`.
pub fn weekend_party(date: NaiveDate, weekends: &AlternatingWeekends) -> Party {
    if is_alternating_weekend_user(date, weekends) {
        Party::User
    } else {
        Party::Coparent
    }
}
