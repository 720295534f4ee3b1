//! Core data models for the Custody Schedule Engine.
//!
//! This module contains the result types produced by the calculation
//! functions. None of them are stored: every value is recomputed from the
//! configuration and the query date.

mod custody;
mod holiday;
mod party;
mod school;

pub use custody::{CustodyResolution, CustodyRule, CustodyTransition, DaySummary};
pub use holiday::HolidayAssignment;
pub use party::Party;
pub use school::{SchoolDayInfo, SchoolEventKind, SessionKind, UpcomingSchoolEvent};
