//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading the schedule
//! and school calendar documents from disk, and [`ConfigSources`] for
//! locating them.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{SchoolCalendar, SchoolCalendarDocument, ScheduleConfig, ScheduleDocument};

/// File name of the schedule document within a configuration directory.
pub const SCHEDULE_FILE: &str = "schedule.yaml";

/// File name of the school calendar document within a configuration directory.
pub const SCHOOL_CALENDAR_FILE: &str = "school_calendar.yaml";

/// Where the configuration documents live.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml         # Required: custody pattern and holiday rules
/// └── school_calendar.yaml  # Optional: terms, events, bell times
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
    /// Path to the schedule document.
    pub schedule: PathBuf,
    /// Path to the school calendar document. A missing file disables the
    /// school overlay.
    pub school_calendar: Option<PathBuf>,
}

impl ConfigSources {
    /// Sources for a schedule document alone, with no school calendar.
    pub fn new<P: Into<PathBuf>>(schedule: P) -> Self {
        Self {
            schedule: schedule.into(),
            school_calendar: None,
        }
    }

    /// Standard file names within a configuration directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            schedule: dir.join(SCHEDULE_FILE),
            school_calendar: Some(dir.join(SCHOOL_CALENDAR_FILE)),
        }
    }

    /// Sets the school calendar document path.
    pub fn with_school_calendar<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.school_calendar = Some(path.into());
        self
    }
}

/// Reads and validates configuration documents.
///
/// Documents are YAML unless the file extension is `.json`.
///
/// # Example
///
/// ```no_run
/// use custody_engine::config::ConfigLoader;
///
/// let schedule = ConfigLoader::load_schedule("./config/default/schedule.yaml")?;
/// println!("Overnight party: {}", schedule.weekday_overnight.party);
/// # Ok::<(), custody_engine::error::EngineError>(())
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the schedule document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read,
    /// [`EngineError::ConfigParseError`] if it is not a valid document, or a
    /// validation error from [`ScheduleConfig::from_document`].
    pub fn load_schedule<P: AsRef<Path>>(path: P) -> EngineResult<ScheduleConfig> {
        let path = path.as_ref();
        let document = Self::load_document::<ScheduleDocument>(path)?;
        let config = ScheduleConfig::from_document(document)?;
        info!(path = %path.display(), "Loaded schedule configuration");
        Ok(config)
    }

    /// Loads and validates the school calendar document.
    ///
    /// Returns `Ok(None)` when the file does not exist: the school overlay
    /// is optional and its absence is not an error.
    pub fn load_school_calendar<P: AsRef<Path>>(path: P) -> EngineResult<Option<SchoolCalendar>> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No school calendar; overlay disabled");
                return Ok(None);
            }
            Err(_) => {
                return Err(EngineError::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
        };

        let document = Self::parse_document::<SchoolCalendarDocument>(&content, path)?;
        let calendar = SchoolCalendar::from_document(document)?;
        info!(
            path = %path.display(),
            terms = calendar.terms.len(),
            events = calendar.events.len(),
            "Loaded school calendar"
        );
        Ok(Some(calendar))
    }

    /// Parses and validates a schedule document from a YAML string.
    pub fn schedule_from_yaml(content: &str) -> EngineResult<ScheduleConfig> {
        let document = Self::parse_document::<ScheduleDocument>(content, Path::new("<inline>"))?;
        ScheduleConfig::from_document(document)
    }

    /// Parses and validates a school calendar document from a YAML string.
    pub fn school_calendar_from_yaml(content: &str) -> EngineResult<SchoolCalendar> {
        let document =
            Self::parse_document::<SchoolCalendarDocument>(content, Path::new("<inline>"))?;
        SchoolCalendar::from_document(document)
    }

    /// Reads and parses a document file.
    fn load_document<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::parse_document(&content, path)
    }

    /// Parses document content, choosing the format from the path extension.
    fn parse_document<T: serde::de::DeserializeOwned>(content: &str, path: &Path) -> EngineResult<T> {
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let parsed = if is_json {
            serde_json::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        })
    }
}
