//! Employer working-hours profiles.
//!
//! Each employing company has normal hours and, for some, shorter Friday
//! hours. The table always carries one fallback profile that answers for
//! any name it does not recognize, so new companies appearing in the
//! entity list never break event creation.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{HoursKind, HoursWindow, ScheduleDefaults};

/// Negotiated hours for one employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerProfile {
    /// Employer identifier as it appears on the entity record.
    pub name: String,
    /// Monday to Thursday (and weekend) hours.
    pub normal_hours: HoursWindow,
    /// Friday hours. `None` = same as normal hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday_hours: Option<HoursWindow>,
}

impl EmployerProfile {
    /// Creates a profile with identical hours every day.
    pub fn new(name: impl Into<String>, normal_hours: HoursWindow) -> Self {
        Self {
            name: name.into(),
            normal_hours,
            friday_hours: None,
        }
    }

    /// Sets shortened Friday hours.
    pub fn with_friday_hours(mut self, hours: HoursWindow) -> Self {
        self.friday_hours = Some(hours);
        self
    }

    /// Hours applying on Fridays.
    pub fn friday_hours(&self) -> HoursWindow {
        self.friday_hours.unwrap_or(self.normal_hours)
    }

    /// Which window applies on `day`, and the window itself.
    ///
    /// Only the date's own weekday is consulted.
    pub fn hours_on(&self, day: NaiveDate) -> (HoursKind, HoursWindow) {
        if day.weekday() == Weekday::Fri {
            (HoursKind::Friday, self.friday_hours())
        } else {
            (HoursKind::Normal, self.normal_hours)
        }
    }

    /// Default event start/end on `day`.
    pub fn defaults_on(&self, day: NaiveDate) -> ScheduleDefaults {
        let (kind, window) = self.hours_on(day);
        let (start, end) = window.on(day);
        ScheduleDefaults {
            employer: self.name.clone(),
            day,
            start,
            end,
            hours: kind,
        }
    }

    /// Whether `name` designates this employer (trimmed, case-insensitive).
    pub fn matches(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }
}

/// Employer profiles plus the fallback for unknown names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerTable {
    /// Profile used for unrecognized employers.
    pub fallback: EmployerProfile,
    /// Known employers.
    #[serde(default)]
    pub profiles: Vec<EmployerProfile>,
}

impl EmployerTable {
    /// Creates a table with only a fallback profile.
    pub fn new(fallback: EmployerProfile) -> Self {
        Self {
            fallback,
            profiles: Vec::new(),
        }
    }

    /// Adds a known employer.
    pub fn with_profile(mut self, profile: EmployerProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Profile for `name`, or the fallback.
    pub fn lookup(&self, name: &str) -> &EmployerProfile {
        self.find(name).unwrap_or(&self.fallback)
    }

    /// Profile for `name` if it is a known employer.
    pub fn find(&self, name: &str) -> Option<&EmployerProfile> {
        self.profiles.iter().find(|p| p.matches(name))
    }

    /// Whether `name` is a known employer.
    pub fn is_known(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

/// Canonical form used for employer-name comparison.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
