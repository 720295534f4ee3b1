//! Display settings for rendered text.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::models::Party;

/// Names and timezone used when rendering schedule text.
///
/// # Example
///
/// ```
/// use custody_engine::config::DisplaySettings;
/// use custody_engine::models::Party;
///
/// let settings = DisplaySettings::new("Alex", "Jordan", chrono_tz::America::Chicago);
/// assert_eq!(settings.name_of(Party::Coparent), "Jordan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Display name for the user.
    pub user_name: String,
    /// Display name for the co-parent.
    pub coparent_name: String,
    /// The household's timezone.
    pub timezone: Tz,
}

impl DisplaySettings {
    /// Creates display settings.
    pub fn new(user_name: impl Into<String>, coparent_name: impl Into<String>, timezone: Tz) -> Self {
        Self {
            user_name: user_name.into(),
            coparent_name: coparent_name.into(),
            timezone,
        }
    }

    /// The display name for `party`.
    pub fn name_of(&self, party: Party) -> &str {
        match party {
            Party::User => &self.user_name,
            Party::Coparent => &self.coparent_name,
        }
    }

    /// The household's calendar date at `instant`.
    ///
    /// Callers use this to turn their own "now" into the query date; the
    /// engine itself never reads the clock.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::new("You", "Co-parent", Tz::UTC)
    }
}
