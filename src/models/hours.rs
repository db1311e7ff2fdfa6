//! Daily working-hours windows.
//!
//! A window is a pair of local clock times on the same day, start
//! inclusive and end exclusive. Configuration and UI payloads carry the
//! times as `"HH:MM"` strings.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, PlanningResult};

/// Working hours [start, end) for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursWindow {
    /// Clock time the day starts.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// Clock time the day ends.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl HoursWindow {
    /// Creates a window from two clock times.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Creates a window from `(start_hour, start_minute, end_hour, end_minute)`.
    ///
    /// # Errors
    /// `InvalidHours` when a component is not a real clock time.
    pub fn from_hm(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> PlanningResult<Self> {
        Ok(Self {
            start: clock(start_hour, start_minute)?,
            end: clock(end_hour, end_minute)?,
        })
    }

    /// Whether start is strictly before end.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }

    /// Length of the working day.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether a clock time falls within the window.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Anchors the window on `day`.
    pub fn on(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (day.and_time(self.start), day.and_time(self.end))
    }

    /// `(start_hour, start_minute, end_hour, end_minute)`.
    pub fn as_hm(&self) -> (u32, u32, u32, u32) {
        (
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute(),
        )
    }
}

fn clock(hour: u32, minute: u32) -> PlanningResult<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(PlanningError::InvalidHours { hour, minute })
}

/// `"HH:MM"` serde format for clock times.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid clock time '{raw}': {e}")))
    }
}
