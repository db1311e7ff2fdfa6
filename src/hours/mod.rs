//! Default working hours for new planning events.
//!
//! Given an employer name and a calendar day, selects the employer's
//! Friday or normal window and anchors it on that day. The weekday comes
//! from the event's own date; the current wall-clock date is never
//! consulted, so an event created on Monday for next Friday gets Friday
//! hours.
//!
//! Unknown employer names resolve through the table's fallback profile.

mod resolver;

pub use resolver::ScheduleDefaultsResolver;

use chrono::NaiveDate;

use crate::error::{PlanningError, PlanningResult};

/// Date format accepted by [`parse_day`].
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Builds a calendar day from its components.
///
/// # Errors
/// `InvalidDate` when the day does not exist (e.g. 2023-02-29).
pub fn day_from_ymd(year: i32, month: u32, day: u32) -> PlanningResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| PlanningError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// Parses an ISO `YYYY-MM-DD` day.
///
/// # Errors
/// `InvalidDate` for anything else, including an empty string.
pub fn parse_day(text: &str) -> PlanningResult<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
        .map_err(|e| PlanningError::InvalidDate(format!("'{trimmed}': {e}")))
}
