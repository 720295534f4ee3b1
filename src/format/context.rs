//! Pre-formatted schedule context for embedding in prompts and messages.
//!
//! [`ContextFormatter`] renders a [`ScheduleContext`] into labeled text
//! sections separated by blank lines:
//!
//! 1. Custody today and the next transition
//! 2. Upcoming holidays with days-until and whose year it is
//! 3. The school overlay: today's session and upcoming events
//!
//! A section with nothing to show is omitted entirely.

use chrono::NaiveDate;

use crate::calculation::find_holiday;
use crate::config::DisplaySettings;
use crate::models::{
    CustodyResolution, CustodyRule, CustodyTransition, HolidayAssignment, SchoolDayInfo,
    SessionKind, UpcomingSchoolEvent,
};

use super::{clock_time, long_date, relative_days};

/// Holiday lookahead used by the context text, in days.
pub const CONTEXT_HOLIDAY_DAYS: u32 = 30;

/// School event lookahead used by the context text, in days.
pub const CONTEXT_SCHOOL_EVENT_DAYS: u32 = 14;

/// Everything the context text is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleContext {
    /// The query date.
    pub date: NaiveDate,
    /// Custody on the query date.
    pub status: CustodyResolution,
    /// The next change of custody.
    pub next_transition: CustodyTransition,
    /// Holidays in the lookahead window.
    pub upcoming_holidays: Vec<HolidayAssignment>,
    /// Today's school session; `None` when the overlay is unavailable.
    pub school_today: Option<SchoolDayInfo>,
    /// School events in the lookahead window.
    pub school_events: Vec<UpcomingSchoolEvent>,
}

/// Renders schedule context using the configured display names.
#[derive(Debug, Clone, Copy)]
pub struct ContextFormatter<'a> {
    settings: &'a DisplaySettings,
}

impl<'a> ContextFormatter<'a> {
    /// Creates a formatter for `settings`.
    pub fn new(settings: &'a DisplaySettings) -> Self {
        Self { settings }
    }

    /// Renders all non-empty sections, separated by blank lines.
    pub fn render(&self, context: &ScheduleContext) -> String {
        [
            Some(self.custody_section(context)),
            self.holiday_section(context),
            self.school_section(context),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n")
    }

    fn custody_section(&self, context: &ScheduleContext) -> String {
        let status = &context.status;
        let mut section = format!(
            "Custody today ({}): {} has the children ({}).",
            long_date(context.date),
            self.settings.name_of(status.party),
            rule_label(&status.rule)
        );

        let transition = &context.next_transition;
        if transition.fallback {
            section.push_str(&format!("\n{} (estimated)", transition.description));
        } else {
            section.push_str(&format!(
                "\nNext transition: {} ({})",
                transition.description,
                relative_days((transition.date - context.date).num_days())
            ));
        }
        section
    }

    fn holiday_section(&self, context: &ScheduleContext) -> Option<String> {
        if context.upcoming_holidays.is_empty() {
            return None;
        }

        let mut section = String::from("Upcoming holidays:");
        for holiday in &context.upcoming_holidays {
            section.push_str(&format!(
                "\n- {} on {} ({}): {}'s year",
                holiday.display_name(),
                long_date(holiday.date),
                relative_days(holiday.days_until(context.date)),
                self.settings.name_of(holiday.party)
            ));
        }
        Some(section)
    }

    fn school_section(&self, context: &ScheduleContext) -> Option<String> {
        let today = context.school_today.as_ref()?;
        let off_calendar = today.kind == SessionKind::NotInSession && today.term.is_none();
        if off_calendar && context.school_events.is_empty() {
            return None;
        }

        let mut section = format!("School today: {}", session_line(today));
        if !context.school_events.is_empty() {
            section.push_str("\nUpcoming school events:");
            for event in &context.school_events {
                section.push_str(&format!("\n- {}", event_line(event, context.date)));
            }
        }
        Some(section)
    }
}

fn rule_label(rule: &CustodyRule) -> String {
    match rule {
        CustodyRule::Holiday { name } => {
            let display = find_holiday(name).map_or(name.as_str(), |h| h.display_name);
            format!("holiday: {}", display)
        }
        CustodyRule::AlternatingWeekend => "alternating weekend".to_string(),
        CustodyRule::WeekdayOvernight => "weekday overnight".to_string(),
        CustodyRule::Default => "default time".to_string(),
    }
}

fn session_line(info: &SchoolDayInfo) -> String {
    let mut line = info.kind.to_string();
    if let Some(name) = &info.event_name {
        line.push_str(&format!(", {}", name));
    }
    if let (Some(start), Some(end)) = (info.start_time, info.end_time) {
        line.push_str(&format!(", {} to {}", clock_time(start), clock_time(end)));
    }
    if let Some(term) = &info.term {
        line.push_str(&format!(" ({})", term));
    }
    line
}

fn event_line(event: &UpcomingSchoolEvent, date: NaiveDate) -> String {
    let when = match event.end_date {
        Some(end) if end != event.date => {
            format!("{} to {}", long_date(event.date), long_date(end))
        }
        _ => long_date(event.date),
    };
    let timing = if event.date < date {
        "ongoing".to_string()
    } else {
        relative_days(event.days_until)
    };
    format!("{}: {} ({})", event.name, when, timing)
}
