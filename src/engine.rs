//! The query facade over the configuration store.
//!
//! [`CustodyEngine`] takes one snapshot per query and runs the pure
//! calculation functions against it, so a query never mixes two
//! configuration generations.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation;
use crate::config::{
    ConfigSnapshot, ConfigSources, ConfigStore, DisplaySettings, SchoolCalendar, ScheduleConfig,
};
use crate::error::EngineResult;
use crate::format::{
    CONTEXT_HOLIDAY_DAYS, CONTEXT_SCHOOL_EVENT_DAYS, ContextFormatter, ScheduleContext,
};
use crate::models::{
    CustodyResolution, CustodyTransition, DaySummary, HolidayAssignment, Party, SchoolDayInfo,
    UpcomingSchoolEvent,
};

/// Answers custody, holiday, and school queries for explicit dates.
///
/// # Example
///
/// ```no_run
/// use custody_engine::config::{ConfigSources, DisplaySettings};
/// use custody_engine::engine::CustodyEngine;
/// use chrono::NaiveDate;
///
/// let engine = CustodyEngine::open(
///     ConfigSources::from_dir("./config/default"),
///     DisplaySettings::default(),
/// );
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// println!("{}", engine.custody_status(date)?);
/// # Ok::<(), custody_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct CustodyEngine {
    store: ConfigStore,
    display: DisplaySettings,
}

impl CustodyEngine {
    /// Opens an engine over configuration files.
    ///
    /// Load failures do not prevent construction; they are reported by the
    /// queries that need the missing document.
    pub fn open(sources: ConfigSources, display: DisplaySettings) -> Self {
        Self {
            store: ConfigStore::open(sources),
            display,
        }
    }

    /// Builds an engine over in-memory configuration.
    pub fn from_configs(
        schedule: Option<ScheduleConfig>,
        school_calendar: Option<SchoolCalendar>,
        display: DisplaySettings,
    ) -> Self {
        Self {
            store: ConfigStore::from_snapshot(ConfigSnapshot::from_parts(schedule, school_calendar)),
            display,
        }
    }

    /// The display settings used for rendered text.
    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    /// The generation of the current configuration snapshot.
    pub fn generation(&self) -> u64 {
        self.store.snapshot().generation()
    }

    fn snapshot(&self) -> Arc<ConfigSnapshot> {
        self.store.snapshot()
    }

    /// The party with the children on `date`.
    pub fn custody_status(&self, date: NaiveDate) -> EngineResult<Party> {
        self.custody_resolution(date).map(|resolution| resolution.party)
    }

    /// The party with the children on `date` and the rule that decided it.
    pub fn custody_resolution(&self, date: NaiveDate) -> EngineResult<CustodyResolution> {
        let snapshot = self.snapshot();
        let resolution = calculation::resolve_custody(date, snapshot.schedule()?);
        debug!(%date, party = %resolution.party, "Resolved custody");
        Ok(resolution)
    }

    /// The next change of custody strictly after `date`.
    pub fn next_transition(&self, date: NaiveDate) -> EngineResult<CustodyTransition> {
        let snapshot = self.snapshot();
        Ok(calculation::next_transition(
            date,
            snapshot.schedule()?,
            &self.display,
        ))
    }

    /// Seven days starting at `date` with pickup and dropoff markers.
    pub fn week_summary(&self, date: NaiveDate) -> EngineResult<Vec<DaySummary>> {
        let snapshot = self.snapshot();
        Ok(calculation::week_summary(date, snapshot.schedule()?))
    }

    /// Holidays from `date` through `date + days_ahead`, soonest first.
    pub fn upcoming_holidays(
        &self,
        date: NaiveDate,
        days_ahead: u32,
    ) -> EngineResult<Vec<HolidayAssignment>> {
        let snapshot = self.snapshot();
        let rules = &snapshot.schedule()?.holiday_rules;
        Ok(calculation::upcoming_holidays(date, days_ahead, rules))
    }

    /// Every holiday assignment in `year`, in holiday name order.
    pub fn holiday_assignments(&self, year: i32) -> EngineResult<Vec<HolidayAssignment>> {
        let snapshot = self.snapshot();
        let rules = &snapshot.schedule()?.holiday_rules;
        Ok(calculation::holiday_assignments_for_year(year, rules))
    }

    /// School session details for `date`; `Ok(None)` when the school overlay
    /// is not configured.
    pub fn school_session_info(&self, date: NaiveDate) -> EngineResult<Option<SchoolDayInfo>> {
        let snapshot = self.snapshot();
        Ok(snapshot
            .school_calendar()?
            .map(|calendar| calculation::school_session_info(date, calendar)))
    }

    /// School events starting within `days_ahead` days of `date`, or ongoing
    /// on it. Empty when the school overlay is not configured.
    pub fn upcoming_school_events(
        &self,
        date: NaiveDate,
        days_ahead: u32,
    ) -> EngineResult<Vec<UpcomingSchoolEvent>> {
        let snapshot = self.snapshot();
        Ok(snapshot
            .school_calendar()?
            .map(|calendar| calculation::upcoming_school_events(date, days_ahead, calendar))
            .unwrap_or_default())
    }

    /// All query results for `date` in one consistent snapshot.
    pub fn schedule_context(&self, date: NaiveDate) -> EngineResult<ScheduleContext> {
        let snapshot = self.snapshot();
        let schedule = snapshot.schedule()?;

        // A broken school calendar only drops the school section.
        let calendar = snapshot.school_calendar().ok().flatten();

        Ok(ScheduleContext {
            date,
            status: calculation::resolve_custody(date, schedule),
            next_transition: calculation::next_transition(date, schedule, &self.display),
            upcoming_holidays: calculation::upcoming_holidays(
                date,
                CONTEXT_HOLIDAY_DAYS,
                &schedule.holiday_rules,
            ),
            school_today: calendar.map(|c| calculation::school_session_info(date, c)),
            school_events: calendar
                .map(|c| calculation::upcoming_school_events(date, CONTEXT_SCHOOL_EVENT_DAYS, c))
                .unwrap_or_default(),
        })
    }

    /// The rendered context text for `date`.
    ///
    /// Empty when the schedule is not configured.
    pub fn schedule_context_text(&self, date: NaiveDate) -> String {
        match self.schedule_context(date) {
            Ok(context) => ContextFormatter::new(&self.display).render(&context),
            Err(err) => {
                debug!(%date, error = %err, "No schedule context available");
                String::new()
            }
        }
    }

    /// Re-reads the configuration files and swaps in the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first load error. The failed snapshot stays installed, so
    /// queries report the same error until a later reload succeeds.
    pub fn reload_configuration(&self) -> EngineResult<()> {
        self.store.reload().map(|_| ())
    }
}
