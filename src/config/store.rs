//! The in-memory configuration cache.
//!
//! [`ConfigStore`] owns the current [`ConfigSnapshot`] behind a single
//! `Arc`. Readers clone the `Arc` and compute against that snapshot; a
//! reload builds a complete replacement and swaps the `Arc`, so no reader
//! ever sees a half-updated configuration.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::loader::{ConfigLoader, ConfigSources};
use super::types::{SchoolCalendar, ScheduleConfig};

/// Placeholder path reported for configurations built in memory.
const IN_MEMORY: &str = "<in-memory>";

/// One immutable generation of loaded configuration.
///
/// The schedule and the school calendar load independently: a broken school
/// calendar never blocks custody queries.
#[derive(Debug, Clone)]
pub struct ConfigSnapshot {
    schedule: Result<ScheduleConfig, EngineError>,
    school_calendar: Result<Option<SchoolCalendar>, EngineError>,
    generation: u64,
}

impl ConfigSnapshot {
    /// Loads both documents from `sources`.
    ///
    /// Failures are logged once and retained in the snapshot.
    pub fn load(sources: &ConfigSources, generation: u64) -> Self {
        let schedule = ConfigLoader::load_schedule(&sources.schedule);
        if let Err(err) = &schedule {
            warn!(generation, error = %err, "Schedule configuration unavailable");
        }

        let school_calendar = match &sources.school_calendar {
            Some(path) => ConfigLoader::load_school_calendar(path),
            None => Ok(None),
        };
        if let Err(err) = &school_calendar {
            warn!(generation, error = %err, "School calendar unavailable");
        }

        Self {
            schedule,
            school_calendar,
            generation,
        }
    }

    /// Builds a snapshot from already-validated configuration.
    pub fn from_parts(schedule: Option<ScheduleConfig>, school_calendar: Option<SchoolCalendar>) -> Self {
        Self {
            schedule: schedule.ok_or_else(|| EngineError::ConfigNotFound {
                path: IN_MEMORY.to_string(),
            }),
            school_calendar: Ok(school_calendar),
            generation: 0,
        }
    }

    /// The schedule configuration, or the error that prevented loading it.
    pub fn schedule(&self) -> EngineResult<&ScheduleConfig> {
        self.schedule.as_ref().map_err(Clone::clone)
    }

    /// The school calendar; `Ok(None)` when the overlay is disabled.
    pub fn school_calendar(&self) -> EngineResult<Option<&SchoolCalendar>> {
        self.school_calendar
            .as_ref()
            .map(Option::as_ref)
            .map_err(Clone::clone)
    }

    /// The reload generation this snapshot was built in. Starts at 0.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The first load error, schedule before school calendar.
    fn first_error(&self) -> Option<EngineError> {
        self.schedule
            .as_ref()
            .err()
            .or(self.school_calendar.as_ref().err())
            .cloned()
    }
}

/// Caches the current configuration snapshot and reloads it on demand.
#[derive(Debug)]
pub struct ConfigStore {
    sources: Option<ConfigSources>,
    current: RwLock<Arc<ConfigSnapshot>>,
    // Held across load and swap so generations stay strictly increasing.
    reload_lock: Mutex<()>,
}

impl ConfigStore {
    /// Loads configuration from `sources`.
    ///
    /// Never fails: load errors are kept in the snapshot and returned by
    /// the queries that need the missing document.
    pub fn open(sources: ConfigSources) -> Self {
        let snapshot = ConfigSnapshot::load(&sources, 0);
        Self {
            sources: Some(sources),
            current: RwLock::new(Arc::new(snapshot)),
            reload_lock: Mutex::new(()),
        }
    }

    /// A store over a fixed in-memory snapshot. Reloading keeps it as is.
    pub fn from_snapshot(snapshot: ConfigSnapshot) -> Self {
        Self {
            sources: None,
            current: RwLock::new(Arc::new(snapshot)),
            reload_lock: Mutex::new(()),
        }
    }

    /// The configuration sources, if the store was opened from files.
    pub fn sources(&self) -> Option<&ConfigSources> {
        self.sources.as_ref()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<ConfigSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Re-reads both documents and atomically replaces the current snapshot.
    ///
    /// The new snapshot is installed even when loading fails, so a broken
    /// configuration stays unusable until a corrected reload succeeds.
    /// Concurrent reloads run one at a time; readers are only blocked for
    /// the swap itself.
    ///
    /// # Errors
    ///
    /// Returns the first load error of the new snapshot.
    pub fn reload(&self) -> EngineResult<u64> {
        let Some(sources) = &self.sources else {
            let generation = self.snapshot().generation();
            info!(generation, "In-memory configuration; nothing to reload");
            return Ok(generation);
        };

        let _reloading = self.reload_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let generation = self.snapshot().generation() + 1;
        let snapshot = Arc::new(ConfigSnapshot::load(sources, generation));
        let error = snapshot.first_error();

        {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *guard = snapshot;
        }

        match error {
            Some(err) => Err(err),
            None => {
                info!(generation, "Configuration reloaded");
                Ok(generation)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCHEDULE_FILE, SCHOOL_CALENDAR_FILE};
    use crate::models::Party;
    use std::fs;
    use std::path::PathBuf;

    const SCHEDULE_YAML: &str = r#"
weekday_overnight:
  party: user
  pickup_weekday: wednesday
  dropoff_weekday: thursday
alternating_weekends:
  reference_date: 2024-01-05
  pickup_weekday: friday
  dropoff_weekday: sunday
"#;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("custody-store-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_open_missing_directory_keeps_error() {
        let store = ConfigStore::open(ConfigSources::from_dir("/nonexistent/custody"));
        let snapshot = store.snapshot();

        assert!(matches!(
            snapshot.schedule(),
            Err(EngineError::ConfigNotFound { .. })
        ));
        assert_eq!(snapshot.school_calendar(), Ok(None));
    }

    #[test]
    fn test_reload_picks_up_new_file() {
        let dir = temp_dir();
        let store = ConfigStore::open(ConfigSources::from_dir(&dir));
        assert!(store.snapshot().schedule().is_err());

        fs::write(dir.join(SCHEDULE_FILE), SCHEDULE_YAML).unwrap();
        assert_eq!(store.reload(), Ok(1));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.generation(), 1);
        assert_eq!(
            snapshot.schedule().unwrap().weekday_overnight.party,
            Party::User
        );
    }

    #[test]
    fn test_failed_reload_replaces_snapshot() {
        let dir = temp_dir();
        fs::write(dir.join(SCHEDULE_FILE), SCHEDULE_YAML).unwrap();
        let store = ConfigStore::open(ConfigSources::from_dir(&dir));
        assert!(store.snapshot().schedule().is_ok());

        fs::write(
            dir.join(SCHEDULE_FILE),
            SCHEDULE_YAML.replace("wednesday", "someday"),
        )
        .unwrap();

        assert!(matches!(
            store.reload(),
            Err(EngineError::InvalidWeekday { .. })
        ));
        assert!(matches!(
            store.snapshot().schedule(),
            Err(EngineError::InvalidWeekday { .. })
        ));
    }

    #[test]
    fn test_broken_school_calendar_does_not_block_schedule() {
        let dir = temp_dir();
        fs::write(dir.join(SCHEDULE_FILE), SCHEDULE_YAML).unwrap();
        fs::write(dir.join(SCHOOL_CALENDAR_FILE), "terms: [").unwrap();

        let store = ConfigStore::open(ConfigSources::from_dir(&dir));
        let snapshot = store.snapshot();

        assert!(snapshot.schedule().is_ok());
        assert!(matches!(
            snapshot.school_calendar(),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_readers_keep_their_snapshot_across_reload() {
        let dir = temp_dir();
        fs::write(dir.join(SCHEDULE_FILE), SCHEDULE_YAML).unwrap();
        let store = ConfigStore::open(ConfigSources::from_dir(&dir));

        let before = store.snapshot();
        fs::remove_file(dir.join(SCHEDULE_FILE)).unwrap();
        assert!(store.reload().is_err());

        assert!(before.schedule().is_ok());
        assert_eq!(before.generation(), 0);
        assert!(store.snapshot().schedule().is_err());
    }

    #[test]
    fn test_concurrent_reloads_keep_generations_ordered() {
        let dir = temp_dir();
        fs::write(dir.join(SCHEDULE_FILE), SCHEDULE_YAML).unwrap();
        let store = Arc::new(ConfigStore::open(ConfigSources::from_dir(&dir)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.reload().unwrap())
            })
            .collect();
        let mut generations: Vec<u64> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        generations.sort_unstable();

        assert_eq!(generations, (1..=8).collect::<Vec<u64>>());
        assert_eq!(store.snapshot().generation(), 8);
    }

    #[test]
    fn test_sources_without_school_calendar() {
        let dir = temp_dir();
        fs::write(dir.join(SCHEDULE_FILE), SCHEDULE_YAML).unwrap();
        let sources = ConfigSources::new(dir.join(SCHEDULE_FILE));

        let store = ConfigStore::open(sources.clone());
        assert_eq!(store.sources(), Some(&sources));
        assert!(store.snapshot().schedule().is_ok());
        assert_eq!(store.snapshot().school_calendar(), Ok(None));
    }

    #[test]
    fn test_sources_with_explicit_school_calendar() {
        let dir = temp_dir();
        fs::write(dir.join(SCHEDULE_FILE), SCHEDULE_YAML).unwrap();
        let sources = ConfigSources::new(dir.join(SCHEDULE_FILE))
            .with_school_calendar("./config/default/school_calendar.yaml");

        let store = ConfigStore::open(sources);
        let snapshot = store.snapshot();
        let calendar = snapshot.school_calendar().unwrap().unwrap();
        assert_eq!(calendar.terms[0].name, "Fall Semester");
    }

    #[test]
    fn test_in_memory_store_reload_is_noop() {
        let store = ConfigStore::from_snapshot(ConfigSnapshot::from_parts(None, None));
        assert_eq!(store.sources(), None);
        assert_eq!(store.reload(), Ok(0));
        assert!(store.snapshot().schedule().unwrap_err().is_missing_config());
    }
}
