//! Pre-filled planning event.
//!
//! An `EventDraft` is what the planning screen opens when a user drops a
//! new event on the calendar: employer, start/end and an optional trip
//! zone, all editable before the event is saved. Drafts are also the unit
//! of drag-and-drop duplication onto other days.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{ScheduleDefaults, ZoneLabel};
use crate::error::{PlanningError, PlanningResult};

/// Editable values of a calendar event before it is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Employer the event is planned for.
    pub employer: String,
    /// Event start (local).
    pub start: NaiveDateTime,
    /// Event end (local).
    pub end: NaiveDateTime,
    /// Suggested or chosen trip zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_label: Option<ZoneLabel>,
}

impl EventDraft {
    /// Creates a draft spanning [start, end).
    pub fn new(employer: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            employer: employer.into(),
            start,
            end,
            zone_label: None,
        }
    }

    /// Creates a draft from resolved defaults.
    pub fn from_defaults(employer: impl Into<String>, defaults: &ScheduleDefaults) -> Self {
        Self::new(employer, defaults.start, defaults.end)
    }

    /// Overrides the start.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    /// Overrides the end.
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = end;
        self
    }

    /// Sets the trip zone.
    pub fn with_zone(mut self, zone: ZoneLabel) -> Self {
        self.zone_label = Some(zone);
        self
    }

    /// Day the event starts on.
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Event length.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Copy of this event moved to start on `day`.
    ///
    /// Clock times and total span are kept, so an event crossing midnight
    /// still ends the following day.
    ///
    /// # Errors
    /// `InvalidDate` when the moved end falls past the last representable
    /// date.
    pub fn duplicate_on(&self, day: NaiveDate) -> PlanningResult<Self> {
        let start = day.and_time(self.start.time());
        let end = start
            .checked_add_signed(self.duration())
            .ok_or_else(|| PlanningError::InvalidDate(format!("{day}: event end out of range")))?;
        Ok(Self {
            employer: self.employer.clone(),
            start,
            end,
            zone_label: self.zone_label.clone(),
        })
    }

    /// Copies onto each of `days`, in order. Stops at the first day that
    /// cannot hold the event.
    pub fn duplicate_across<I>(&self, days: I) -> PlanningResult<Vec<Self>>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        days.into_iter().map(|d| self.duplicate_on(d)).collect()
    }
}
