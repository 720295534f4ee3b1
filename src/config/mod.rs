//! Configuration loading and management for the Custody Schedule Engine.
//!
//! This module loads the schedule and school calendar documents from YAML
//! (or JSON) files, validates them into strongly typed configuration, and
//! caches the result in a reloadable [`ConfigStore`].
//!
//! # Example
//!
//! ```no_run
//! use custody_engine::config::{ConfigSources, ConfigStore};
//!
//! let store = ConfigStore::open(ConfigSources::from_dir("./config/default"));
//! let snapshot = store.snapshot();
//! println!("Schedule loaded: {}", snapshot.schedule().is_ok());
//! ```

mod display;
mod loader;
mod store;
mod types;

pub use display::DisplaySettings;
pub use loader::{ConfigLoader, ConfigSources, SCHEDULE_FILE, SCHOOL_CALENDAR_FILE};
pub use store::{ConfigSnapshot, ConfigStore};
pub use types::{
    AlternatingWeekends, DailySchedule, HolidayRules, SchoolCalendar, SchoolEvent, SchoolTerm,
    ScheduleConfig, WeekdayOvernight, parse_date, parse_time, parse_weekday,
};
