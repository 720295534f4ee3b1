//! Holiday assignment model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Party;
use crate::calculation::find_holiday;

/// A holiday occurrence in a specific year and the party it belongs to.
///
/// At most one assignment exists per holiday name per year.
///
/// # Example
///
/// ```
/// use custody_engine::models::{HolidayAssignment, Party};
/// use chrono::NaiveDate;
///
/// let assignment = HolidayAssignment {
///     name: "thanksgiving".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 11, 28).unwrap(),
///     party: Party::User,
/// };
/// assert_eq!(assignment.display_name(), "Thanksgiving");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayAssignment {
    /// The holiday's configuration name (e.g., "memorial_day").
    pub name: String,
    /// The calendar date of the holiday in the assignment's year.
    pub date: NaiveDate,
    /// The party the holiday belongs to this year.
    pub party: Party,
}

impl HolidayAssignment {
    /// Returns the human-readable holiday name, falling back to the
    /// configuration name for holidays the engine does not define.
    pub fn display_name(&self) -> &str {
        find_holiday(&self.name)
            .map(|definition| definition.display_name)
            .unwrap_or(self.name.as_str())
    }

    /// Returns the number of days from `date` until this holiday.
    ///
    /// Negative when the holiday has already passed.
    pub fn days_until(&self, date: NaiveDate) -> i64 {
        (self.date - date).num_days()
    }
}
