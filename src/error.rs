//! Error types for the Custody Schedule Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Every variant describes a configuration problem: once a configuration has
//! loaded and validated, the custody and school queries are total and never
//! fail.

use thiserror::Error;

/// The main error type for the Custody Schedule Engine.
///
/// Errors are `Clone` so the configuration store can keep the failure of the
/// most recent load and report it to every query until a reload succeeds.
///
/// # Example
///
/// ```
/// use custody_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/schedule.yaml"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The schedule configuration file was not found or could not be read.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configured weekday string is not a recognised day name.
    #[error("Invalid weekday '{value}' for field '{field}'")]
    InvalidWeekday {
        /// The configuration field holding the value.
        field: String,
        /// The offending value.
        value: String,
    },

    /// A configured date string is not a `YYYY-MM-DD` calendar date.
    #[error("Malformed date '{value}' for field '{field}' (expected YYYY-MM-DD)")]
    MalformedDate {
        /// The configuration field holding the value.
        field: String,
        /// The offending value.
        value: String,
    },

    /// A configured time of day is not an `HH:MM` time.
    #[error("Malformed time '{value}' for field '{field}' (expected HH:MM)")]
    MalformedTime {
        /// The configuration field holding the value.
        field: String,
        /// The offending value.
        value: String,
    },

    /// A holiday rule references a holiday the engine does not compute.
    #[error("Unknown holiday '{name}' in holiday rules")]
    UnknownHoliday {
        /// The unrecognised holiday name.
        name: String,
    },

    /// The school calendar is structurally invalid.
    #[error("Invalid school calendar: {message}")]
    InvalidSchoolCalendar {
        /// A description of the problem.
        message: String,
    },
}

impl EngineError {
    /// Returns `true` if this error means the schedule document is absent,
    /// as opposed to present but invalid.
    pub fn is_missing_config(&self) -> bool {
        matches!(self, EngineError::ConfigNotFound { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schedule.yaml"
        );
        assert!(error.is_missing_config());
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
        assert!(!error.is_missing_config());
    }

    #[test]
    fn test_invalid_weekday_displays_field_and_value() {
        let error = EngineError::InvalidWeekday {
            field: "weekday_overnight.pickup_weekday".to_string(),
            value: "Funday".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid weekday 'Funday' for field 'weekday_overnight.pickup_weekday'"
        );
    }

    #[test]
    fn test_malformed_date_displays_field_and_value() {
        let error = EngineError::MalformedDate {
            field: "alternating_weekends.reference_date".to_string(),
            value: "01/05/2024".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed date '01/05/2024' for field 'alternating_weekends.reference_date' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_unknown_holiday_displays_name() {
        let error = EngineError::UnknownHoliday {
            name: "festivus".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown holiday 'festivus' in holiday rules"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Clone + Send + Sync>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_calendar() -> EngineResult<()> {
            Err(EngineError::InvalidSchoolCalendar {
                message: "terms overlap".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_calendar()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(EngineError::InvalidSchoolCalendar {
                message: "terms overlap".to_string(),
            })
        );
    }
}
