//! Custody status, transition, and week summary models.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::Party;

/// The rule that decided who has the children on a date.
///
/// Rules are evaluated in declaration order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CustodyRule {
    /// The date is a holiday; the holiday's assignment applies.
    Holiday {
        /// The holiday's configuration name.
        name: String,
    },
    /// The date falls in the alternating weekend range.
    AlternatingWeekend,
    /// The date is the recurring mid-week overnight pickup or dropoff day.
    WeekdayOvernight,
    /// No other rule matched; default time applies.
    Default,
}

/// The custody assignment for a single date, with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyResolution {
    /// The date the resolution applies to.
    pub date: NaiveDate,
    /// The party with the children on this date.
    pub party: Party,
    /// The rule that matched.
    #[serde(flatten)]
    pub rule: CustodyRule,
}

/// The next date on which the assigned party changes.
///
/// # Example
///
/// ```
/// use custody_engine::models::{CustodyTransition, Party};
/// use chrono::NaiveDate;
///
/// let transition = CustodyTransition {
///     date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
///     party: Some(Party::Coparent),
///     description: "Children go to Jordan on Friday, January 12".to_string(),
///     fallback: false,
/// };
/// assert!(!transition.fallback);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyTransition {
    /// The first date with a different party.
    pub date: NaiveDate,
    /// The party gaining the children, when known.
    ///
    /// `None` for fallback results, which only report the next pickup day.
    pub party: Option<Party>,
    /// A human-readable description naming the party and the date.
    pub description: String,
    /// `true` when no change was found in the scan window and the date is
    /// only the next alternating-weekend pickup day. Lower confidence.
    pub fallback: bool,
}

/// One day of a week summary.
///
/// `pickup` marks a change from the previous day and `dropoff` a change on
/// the following day. A day with both flags is a single-day custody window
/// between two days with the other party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The calendar date.
    pub date: NaiveDate,
    /// The day of the week.
    pub weekday: Weekday,
    /// The party with the children on this date.
    pub party: Party,
    /// The party differs from the previous day's.
    pub pickup: bool,
    /// The party differs from the next day's.
    pub dropoff: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_resolution_serializes_rule_inline() {
        let resolution = CustodyResolution {
            date: make_date("2024-11-28"),
            party: Party::User,
            rule: CustodyRule::Holiday {
                name: "thanksgiving".to_string(),
            },
        };
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["party"], "user");
        assert_eq!(json["rule"], "holiday");
        assert_eq!(json["name"], "thanksgiving");
    }

    #[test]
    fn test_unit_rule_serialization() {
        let json = serde_json::to_string(&CustodyRule::AlternatingWeekend).unwrap();
        assert_eq!(json, "{\"rule\":\"alternating_weekend\"}");
    }

    #[test]
    fn test_day_summary_serialization() {
        let day = DaySummary {
            date: make_date("2024-01-10"),
            weekday: Weekday::Wed,
            party: Party::User,
            pickup: true,
            dropoff: false,
        };
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"weekday\":\"Wed\""));
        assert!(json.contains("\"pickup\":true"));

        let deserialized: DaySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, day);
    }
}
