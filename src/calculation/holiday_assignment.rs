//! Holiday assignment resolution.
//!
//! Fixed overrides win over the even/odd-year rotation.

use chrono::NaiveDate;

use crate::config::HolidayRules;
use crate::models::{HolidayAssignment, Party};

use super::holiday_dates::holiday_dates_for_year;

/// Determines which party has the holiday `name` in `year`.
///
/// Resolution order (first match wins):
/// 1. `always_user` -> user
/// 2. `always_coparent` -> coparent
/// 3. even year: user if listed in `even_year_user`, otherwise coparent
/// 4. odd year: user if listed in `odd_year_user`, otherwise coparent
///
/// # Example
///
/// ```
/// use custody_engine::calculation::assign_holiday;
/// use custody_engine::config::HolidayRules;
/// use custody_engine::models::Party;
///
/// let mut rules = HolidayRules::default();
/// rules.even_year_user.insert("thanksgiving".to_string());
///
/// assert_eq!(assign_holiday("thanksgiving", 2024, &rules), Party::User);
/// assert_eq!(assign_holiday("thanksgiving", 2025, &rules), Party::Coparent);
/// ```
pub fn assign_holiday(name: &str, year: i32, rules: &HolidayRules) -> Party {
    if rules.always_user.contains(name) {
        return Party::User;
    }
    if rules.always_coparent.contains(name) {
        return Party::Coparent;
    }

    let parity_set = if year.rem_euclid(2) == 0 {
        &rules.even_year_user
    } else {
        &rules.odd_year_user
    };

    if parity_set.contains(name) {
        Party::User
    } else {
        Party::Coparent
    }
}

/// Every holiday in `year` with its assigned party, in ascending name order.
pub fn holiday_assignments_for_year(year: i32, rules: &HolidayRules) -> Vec<HolidayAssignment> {
    holiday_dates_for_year(year)
        .into_iter()
        .map(|(name, date)| HolidayAssignment {
            name: name.to_string(),
            date,
            party: assign_holiday(name, year, rules),
        })
        .collect()
}

/// The first assignment in `assignments` that falls on `date`.
///
/// With name-ordered input this applies the documented tie-break: when two
/// holidays share a date, the lexicographically smallest name wins.
pub fn first_holiday_on(
    date: NaiveDate,
    assignments: &[HolidayAssignment],
) -> Option<&HolidayAssignment> {
    assignments.iter().find(|assignment| assignment.date == date)
}
