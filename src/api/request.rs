//! Query parameter types for the Custody Schedule Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default holiday lookahead for `GET /holidays/upcoming`, in days.
pub const DEFAULT_HOLIDAY_DAYS: u32 = 30;

/// Default school event lookahead for `GET /school/events`, in days.
pub const DEFAULT_SCHOOL_EVENT_DAYS: u32 = 14;

/// Query string for endpoints keyed by a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    /// The query date, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Query string for lookahead endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookaheadQuery {
    /// The first day of the window, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Window length in days; the endpoint's default when omitted.
    #[serde(default)]
    pub days: Option<u32>,
}

impl LookaheadQuery {
    /// The requested window length, or `default`.
    pub fn days_or(&self, default: u32) -> u32 {
        self.days.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookahead_days_default() {
        let query: LookaheadQuery = serde_json::from_str(r#"{"date": "2024-11-20"}"#).unwrap();
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 11, 20).unwrap());
        assert_eq!(query.days_or(DEFAULT_HOLIDAY_DAYS), 30);
    }

    #[test]
    fn test_lookahead_days_explicit() {
        let query: LookaheadQuery =
            serde_json::from_str(r#"{"date": "2024-11-20", "days": 7}"#).unwrap();
        assert_eq!(query.days_or(DEFAULT_HOLIDAY_DAYS), 7);
    }

    #[test]
    fn test_date_query_rejects_bad_date() {
        let result: Result<DateQuery, _> = serde_json::from_str(r#"{"date": "11/20/2024"}"#);
        assert!(result.is_err());
    }
}
