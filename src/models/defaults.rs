//! Resolved default times for a new event.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Which of an employer's windows produced the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoursKind {
    /// Regular weekday hours.
    Normal,
    /// Friday hours.
    Friday,
}

/// Default start/end for a presence event on one day.
///
/// Serialized with camelCase keys for the event-editing form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDefaults {
    /// Name of the profile that supplied the hours (fallback name for
    /// unknown employers).
    pub employer: String,
    /// Calendar day of the event.
    pub day: NaiveDate,
    /// Default start instant (local, no timezone).
    pub start: NaiveDateTime,
    /// Default end instant (local, no timezone).
    pub end: NaiveDateTime,
    /// Window that was applied.
    pub hours: HoursKind,
}

impl ScheduleDefaults {
    /// Length of the default working day.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
