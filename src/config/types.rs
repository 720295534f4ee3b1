//! Configuration types for the custody schedule and the school calendar.
//!
//! Each configuration file has two representations: a `*Document` struct that
//! is deserialized verbatim from YAML or JSON (weekdays, dates, and times as
//! strings), and a validated struct with chrono types that the calculation
//! functions consume. Conversion happens once, at load time, so that bad
//! weekday names or dates fail fast instead of producing wrong answers.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::{WeekdayRange, is_known_holiday};
use crate::error::{EngineError, EngineResult};
use crate::models::{Party, SchoolEventKind};

// =============================================================================
// Schedule documents
// =============================================================================

/// Raw schedule configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDocument {
    /// The recurring mid-week overnight.
    pub weekday_overnight: WeekdayOvernightDocument,
    /// The alternating weekend pattern.
    pub alternating_weekends: AlternatingWeekendsDocument,
    /// Holiday assignment rules.
    #[serde(default)]
    pub holiday_rules: HolidayRulesDocument,
}

/// Raw weekday overnight section.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekdayOvernightDocument {
    /// The party holding the overnight.
    pub party: Party,
    /// The weekday the overnight starts.
    pub pickup_weekday: String,
    /// The weekday the overnight ends.
    pub dropoff_weekday: String,
}

/// Raw alternating weekends section.
#[derive(Debug, Clone, Deserialize)]
pub struct AlternatingWeekendsDocument {
    /// A known date belonging to the user's weekend, normally a Friday.
    pub reference_date: String,
    /// The first weekday of the weekend range.
    pub pickup_weekday: String,
    /// The last weekday of the weekend range.
    pub dropoff_weekday: String,
}

/// Raw holiday rules section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayRulesDocument {
    /// Holidays the user has in even years.
    #[serde(default)]
    pub even_year_user: Vec<String>,
    /// Holidays the user has in odd years.
    #[serde(default)]
    pub odd_year_user: Vec<String>,
    /// Holidays the user always has.
    #[serde(default)]
    pub always_user: Vec<String>,
    /// Holidays the co-parent always has.
    #[serde(default)]
    pub always_coparent: Vec<String>,
}

// =============================================================================
// Validated schedule configuration
// =============================================================================

/// The recurring mid-week overnight exception to default time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayOvernight {
    /// The party holding the overnight. The other party holds default time.
    pub party: Party,
    /// The weekday the overnight starts.
    pub pickup_weekday: Weekday,
    /// The weekday the overnight ends.
    pub dropoff_weekday: Weekday,
}

impl WeekdayOvernight {
    /// Returns `true` if `weekday` is the overnight pickup or dropoff day.
    pub fn covers(&self, weekday: Weekday) -> bool {
        weekday == self.pickup_weekday || weekday == self.dropoff_weekday
    }

    /// The party holding default time.
    pub fn default_party(&self) -> Party {
        self.party.other()
    }
}

/// The two-week alternating weekend pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternatingWeekends {
    /// A known date in one of the user's weekends.
    pub reference_date: NaiveDate,
    /// The first weekday of the weekend range.
    pub pickup_weekday: Weekday,
    /// The last weekday of the weekend range.
    pub dropoff_weekday: Weekday,
}

impl AlternatingWeekends {
    /// The weekend as a cyclic weekday range.
    pub fn range(&self) -> WeekdayRange {
        WeekdayRange::new(self.pickup_weekday, self.dropoff_weekday)
    }
}

/// Holiday assignment rules as name sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HolidayRules {
    /// Holidays the user has in even years.
    pub even_year_user: BTreeSet<String>,
    /// Holidays the user has in odd years.
    pub odd_year_user: BTreeSet<String>,
    /// Holidays the user always has.
    pub always_user: BTreeSet<String>,
    /// Holidays the co-parent always has.
    pub always_coparent: BTreeSet<String>,
}

/// The validated schedule configuration.
///
/// Immutable once built; a reload produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleConfig {
    /// The recurring mid-week overnight.
    pub weekday_overnight: WeekdayOvernight,
    /// The alternating weekend pattern.
    pub alternating_weekends: AlternatingWeekends,
    /// Holiday assignment rules.
    pub holiday_rules: HolidayRules,
}

impl ScheduleConfig {
    /// Validates a raw schedule document.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidWeekday`] for an unrecognised weekday name
    /// - [`EngineError::MalformedDate`] for a reference date that is not `YYYY-MM-DD`
    /// - [`EngineError::UnknownHoliday`] for a holiday name the engine does not compute
    pub fn from_document(document: ScheduleDocument) -> EngineResult<Self> {
        let overnight = &document.weekday_overnight;
        let weekday_overnight = WeekdayOvernight {
            party: overnight.party,
            pickup_weekday: parse_weekday(
                "weekday_overnight.pickup_weekday",
                &overnight.pickup_weekday,
            )?,
            dropoff_weekday: parse_weekday(
                "weekday_overnight.dropoff_weekday",
                &overnight.dropoff_weekday,
            )?,
        };

        let weekends = &document.alternating_weekends;
        let alternating_weekends = AlternatingWeekends {
            reference_date: parse_date(
                "alternating_weekends.reference_date",
                &weekends.reference_date,
            )?,
            pickup_weekday: parse_weekday(
                "alternating_weekends.pickup_weekday",
                &weekends.pickup_weekday,
            )?,
            dropoff_weekday: parse_weekday(
                "alternating_weekends.dropoff_weekday",
                &weekends.dropoff_weekday,
            )?,
        };

        if !alternating_weekends
            .range()
            .contains(alternating_weekends.reference_date.weekday())
        {
            warn!(
                reference_date = %alternating_weekends.reference_date,
                pickup = %alternating_weekends.pickup_weekday,
                dropoff = %alternating_weekends.dropoff_weekday,
                "Weekend reference date is outside the weekend range"
            );
        }

        let rules = document.holiday_rules;
        let holiday_rules = HolidayRules {
            even_year_user: holiday_set(rules.even_year_user)?,
            odd_year_user: holiday_set(rules.odd_year_user)?,
            always_user: holiday_set(rules.always_user)?,
            always_coparent: holiday_set(rules.always_coparent)?,
        };

        Ok(Self {
            weekday_overnight,
            alternating_weekends,
            holiday_rules,
        })
    }
}

fn holiday_set(names: Vec<String>) -> EngineResult<BTreeSet<String>> {
    names
        .into_iter()
        .map(|name| {
            let name = name.trim().to_string();
            if is_known_holiday(&name) {
                Ok(name)
            } else {
                Err(EngineError::UnknownHoliday { name })
            }
        })
        .collect()
}

// =============================================================================
// School calendar documents
// =============================================================================

/// Raw school calendar file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolCalendarDocument {
    /// School terms in chronological order.
    #[serde(default)]
    pub terms: Vec<TermDocument>,
    /// School events.
    #[serde(default)]
    pub events: Vec<EventDocument>,
    /// Bell times.
    pub daily_schedule: DailyScheduleDocument,
}

/// Raw school term.
#[derive(Debug, Clone, Deserialize)]
pub struct TermDocument {
    /// The term name (e.g., "Fall Semester").
    pub name: String,
    /// The first day of the term.
    pub start: String,
    /// The last day of the term.
    pub end: String,
}

/// Raw school event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDocument {
    /// The first day of the event.
    pub date: String,
    /// The last day of a ranged event.
    #[serde(default)]
    pub end_date: Option<String>,
    /// The event kind.
    pub kind: SchoolEventKind,
    /// The event name.
    pub name: String,
}

/// Raw daily schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyScheduleDocument {
    /// Regular day start time.
    pub regular_start: String,
    /// Regular day end time.
    pub regular_end: String,
    /// Early release start time.
    pub early_out_start: String,
    /// Early release end time.
    pub early_out_end: String,
    /// Weekdays with a weekly early release.
    #[serde(default)]
    pub early_out_weekdays: Vec<String>,
}

// =============================================================================
// Validated school calendar
// =============================================================================

/// A school term, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolTerm {
    /// The term name.
    pub name: String,
    /// The first day of the term.
    pub start: NaiveDate,
    /// The last day of the term.
    pub end: NaiveDate,
}

impl SchoolTerm {
    /// Returns `true` if `date` is within the term.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A school event. Single-day unless `end_date` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolEvent {
    /// The first day of the event.
    pub date: NaiveDate,
    /// The last day of a ranged event (inclusive).
    pub end_date: Option<NaiveDate>,
    /// The event kind.
    pub kind: SchoolEventKind,
    /// The event name.
    pub name: String,
}

impl SchoolEvent {
    /// The last day of the event.
    pub fn end(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.date)
    }

    /// Returns `true` if the event covers `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.date && date <= self.end()
    }
}

/// Bell times for regular and early-release days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySchedule {
    /// Regular day start time.
    pub regular_start: NaiveTime,
    /// Regular day end time.
    pub regular_end: NaiveTime,
    /// Early release start time.
    pub early_out_start: NaiveTime,
    /// Early release end time.
    pub early_out_end: NaiveTime,
    /// Weekdays with a weekly early release.
    pub early_out_weekdays: Vec<Weekday>,
}

/// The validated school calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolCalendar {
    /// Terms, sorted and non-overlapping.
    pub terms: Vec<SchoolTerm>,
    /// School events.
    pub events: Vec<SchoolEvent>,
    /// Bell times.
    pub daily_schedule: DailySchedule,
}

impl SchoolCalendar {
    /// Validates a raw school calendar document.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MalformedDate`] / [`EngineError::MalformedTime`] for unparsable values
    /// - [`EngineError::InvalidWeekday`] for an unrecognised early-out weekday
    /// - [`EngineError::InvalidSchoolCalendar`] for unsorted or overlapping terms
    ///   and for ranges that end before they start
    pub fn from_document(document: SchoolCalendarDocument) -> EngineResult<Self> {
        let mut terms = Vec::with_capacity(document.terms.len());
        for (index, term) in document.terms.into_iter().enumerate() {
            let start = parse_date(&format!("terms[{}].start", index), &term.start)?;
            let end = parse_date(&format!("terms[{}].end", index), &term.end)?;
            if end < start {
                return Err(EngineError::InvalidSchoolCalendar {
                    message: format!("term '{}' ends before it starts", term.name),
                });
            }
            terms.push(SchoolTerm {
                name: term.name,
                start,
                end,
            });
        }

        for pair in terms.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(EngineError::InvalidSchoolCalendar {
                    message: format!(
                        "term '{}' overlaps or precedes term '{}'",
                        pair[1].name, pair[0].name
                    ),
                });
            }
        }

        let mut events = Vec::with_capacity(document.events.len());
        for (index, event) in document.events.into_iter().enumerate() {
            let date = parse_date(&format!("events[{}].date", index), &event.date)?;
            let end_date = event
                .end_date
                .as_deref()
                .map(|value| parse_date(&format!("events[{}].end_date", index), value))
                .transpose()?;
            if end_date.is_some_and(|end| end < date) {
                return Err(EngineError::InvalidSchoolCalendar {
                    message: format!("event '{}' ends before it starts", event.name),
                });
            }
            events.push(SchoolEvent {
                date,
                end_date,
                kind: event.kind,
                name: event.name,
            });
        }

        let schedule = document.daily_schedule;
        let daily_schedule = DailySchedule {
            regular_start: parse_time("daily_schedule.regular_start", &schedule.regular_start)?,
            regular_end: parse_time("daily_schedule.regular_end", &schedule.regular_end)?,
            early_out_start: parse_time(
                "daily_schedule.early_out_start",
                &schedule.early_out_start,
            )?,
            early_out_end: parse_time("daily_schedule.early_out_end", &schedule.early_out_end)?,
            early_out_weekdays: schedule
                .early_out_weekdays
                .iter()
                .map(|value| parse_weekday("daily_schedule.early_out_weekdays", value))
                .collect::<EngineResult<Vec<_>>>()?,
        };

        Ok(Self {
            terms,
            events,
            daily_schedule,
        })
    }

    /// The first day of the first term and the last day of the last term.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.terms.first()?;
        let last = self.terms.last()?;
        Some((first.start, last.end))
    }

    /// The term containing `date`, if any.
    pub fn term_on(&self, date: NaiveDate) -> Option<&SchoolTerm> {
        self.terms.iter().find(|term| term.contains(date))
    }
}

// =============================================================================
// Value parsers
// =============================================================================

/// Parses a weekday name such as "Friday" or "fri" (case-insensitive).
pub fn parse_weekday(field: &str, value: &str) -> EngineResult<Weekday> {
    Weekday::from_str(value.trim()).map_err(|_| EngineError::InvalidWeekday {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses a `YYYY-MM-DD` local calendar date.
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::MalformedDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses an `HH:MM` (or `HH:MM:SS`) time of day.
pub fn parse_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| EngineError::MalformedTime {
            field: field.to_string(),
            value: value.to_string(),
        })
}
