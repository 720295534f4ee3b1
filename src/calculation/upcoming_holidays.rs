//! Holiday lookahead.

use chrono::{Datelike, NaiveDate};

use crate::config::HolidayRules;
use crate::models::HolidayAssignment;

use super::holiday_assignment::holiday_assignments_for_year;

/// Holidays from `date` through `date + days_ahead`, soonest first.
///
/// Scans `date`'s year and the following year so a lookahead in late
/// December still sees January holidays. A holiday on `date` itself is
/// included. Same-day holidays are ordered by name.
///
/// # Example
///
/// ```
/// use custody_engine::calculation::upcoming_holidays;
/// use custody_engine::config::HolidayRules;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
/// let holidays = upcoming_holidays(date, 14, &HolidayRules::default());
/// let names: Vec<&str> = holidays.iter().map(|h| h.name.as_str()).collect();
/// assert_eq!(names, vec!["christmas_eve", "christmas_day", "new_years_day"]);
/// ```
pub fn upcoming_holidays(
    date: NaiveDate,
    days_ahead: u32,
    rules: &HolidayRules,
) -> Vec<HolidayAssignment> {
    let year = date.year();
    let mut holidays: Vec<HolidayAssignment> = [Some(year), year.checked_add(1)]
        .into_iter()
        .flatten()
        .flat_map(|y| holiday_assignments_for_year(y, rules))
        .filter(|holiday| {
            let days_until = holiday.days_until(date);
            days_until >= 0 && days_until <= i64::from(days_ahead)
        })
        .collect();

    holidays.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    holidays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::test_support::sample_schedule;
    use crate::models::Party;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn names(holidays: &[HolidayAssignment]) -> Vec<&str> {
        holidays.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_year_boundary_lookahead() {
        let rules = sample_schedule().holiday_rules;
        let holidays = upcoming_holidays(make_date("2024-12-20"), 31, &rules);

        assert_eq!(
            names(&holidays),
            vec!["christmas_eve", "christmas_day", "new_years_day", "mlk_day"]
        );
        // New Year's Day 2025 is an odd year: even-year holiday goes to coparent
        assert_eq!(holidays[2].date, make_date("2025-01-01"));
        assert_eq!(holidays[2].party, Party::Coparent);
        // MLK Day 2025 is odd-year user
        assert_eq!(holidays[3].date, make_date("2025-01-20"));
        assert_eq!(holidays[3].party, Party::User);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let rules = sample_schedule().holiday_rules;

        let today = upcoming_holidays(make_date("2024-07-04"), 0, &rules);
        assert_eq!(names(&today), vec!["independence_day"]);

        let exact = upcoming_holidays(make_date("2024-06-30"), 4, &rules);
        assert_eq!(names(&exact), vec!["independence_day"]);

        let short = upcoming_holidays(make_date("2024-06-30"), 3, &rules);
        assert!(short.is_empty());
    }

    #[test]
    fn test_past_holidays_are_excluded() {
        let rules = sample_schedule().holiday_rules;
        let holidays = upcoming_holidays(make_date("2024-07-05"), 30, &rules);
        assert!(holidays.is_empty());
    }

    #[test]
    fn test_results_sorted_by_date() {
        let rules = sample_schedule().holiday_rules;
        let holidays = upcoming_holidays(make_date("2024-01-01"), 366, &rules);

        assert_eq!(holidays.len(), 15);
        for pair in holidays.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
        assert_eq!(holidays[0].name, "new_years_day");
        assert_eq!(holidays[14].date, make_date("2025-01-01"));
    }
}
