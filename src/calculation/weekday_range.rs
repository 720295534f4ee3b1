//! Cyclic weekday ranges.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// An inclusive range of weekdays that may wrap past the end of the week.
///
/// Weekdays are numbered Monday = 0 through Sunday = 6. Friday..Sunday is a
/// plain numeric range; Saturday..Monday wraps and contains Saturday, Sunday
/// and Monday.
///
/// # Example
///
/// ```
/// use custody_engine::calculation::WeekdayRange;
/// use chrono::Weekday;
///
/// let range = WeekdayRange::new(Weekday::Sat, Weekday::Mon);
/// assert!(range.wraps());
/// assert!(range.contains(Weekday::Sun));
/// assert!(!range.contains(Weekday::Fri));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayRange {
    /// The first weekday in the range.
    pub start: Weekday,
    /// The last weekday in the range.
    pub end: Weekday,
}

impl WeekdayRange {
    /// Creates a range from `start` through `end`.
    pub fn new(start: Weekday, end: Weekday) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the range crosses from Sunday into Monday.
    pub fn wraps(&self) -> bool {
        self.start.num_days_from_monday() > self.end.num_days_from_monday()
    }

    /// Returns `true` if `weekday` is inside the range.
    pub fn contains(&self, weekday: Weekday) -> bool {
        let day = weekday.num_days_from_monday();
        let start = self.start.num_days_from_monday();
        let end = self.end.num_days_from_monday();
        if start <= end {
            day >= start && day <= end
        } else {
            day >= start || day <= end
        }
    }

    /// The number of days in the range (1-7).
    pub fn day_count(&self) -> u32 {
        (7 + self.end.num_days_from_monday() - self.start.num_days_from_monday()) % 7 + 1
    }
}
