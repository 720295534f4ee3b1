//! School calendar overlay models.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The kind of a configured school event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolEventKind {
    /// School is closed.
    NoSchool,
    /// School lets out early.
    EarlyRelease,
    /// An informational date. Never affects the session type.
    Milestone,
}

/// The type of school session on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// A regular school day.
    Regular,
    /// School lets out early.
    EarlyRelease,
    /// A scheduled closure inside a term.
    NoSchool,
    /// Weekends, days between terms, and days outside the school year.
    NotInSession,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKind::Regular => write!(f, "Regular day"),
            SessionKind::EarlyRelease => write!(f, "Early release"),
            SessionKind::NoSchool => write!(f, "No school"),
            SessionKind::NotInSession => write!(f, "Not in session"),
        }
    }
}

/// School session details for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolDayInfo {
    /// The session type.
    pub kind: SessionKind,
    /// School start time, for days with classes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    /// School end time, for days with classes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    /// The event or label that produced a closure or early release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// The term containing the date, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl SchoolDayInfo {
    /// A `not_in_session` result with an optional enclosing term.
    pub fn not_in_session(term: Option<String>) -> Self {
        Self {
            kind: SessionKind::NotInSession,
            start_time: None,
            end_time: None,
            event_name: None,
            term,
        }
    }
}

/// A school event in an upcoming-events listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingSchoolEvent {
    /// The event name.
    pub name: String,
    /// The event kind.
    pub kind: SchoolEventKind,
    /// The first day of the event.
    pub date: NaiveDate,
    /// The last day of a ranged event (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Days from the query date until the event starts; 0 for ongoing events.
    pub days_until: i64,
}
