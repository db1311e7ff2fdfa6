//! Planning-screen facade over the two resolvers.
//!
//! When a user drops a new event on the calendar, the screen needs the
//! employer's default hours for that day and, if the destination has been
//! geocoded, a suggested trip zone. `Planner` answers both in one call and
//! returns an editable [`EventDraft`].

use chrono::NaiveDate;
use tracing::debug;

use crate::config::PlanningConfig;
use crate::error::PlanningResult;
use crate::geo::{GeoZoneResolver, ZoneSuggestion};
use crate::hours::ScheduleDefaultsResolver;
use crate::models::{Coordinate, EventDraft, ScheduleDefaults};

/// Zone and hours resolution for new events.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use workforce_planning::config::PlanningConfig;
/// use workforce_planning::models::Coordinate;
/// use workforce_planning::planner::Planner;
///
/// let planner = Planner::from_config(&PlanningConfig::builtin().unwrap()).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let site = Coordinate::new(48.8566, 2.3522).unwrap();
///
/// let draft = planner.draft_event("ORIZON TELECOM", friday, Some(site)).unwrap();
/// assert_eq!(draft.end, friday.and_hms_opt(16, 30, 0).unwrap());
/// assert_eq!(draft.zone_label.unwrap().as_str(), "2");
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    geo: GeoZoneResolver,
    hours: ScheduleDefaultsResolver,
}

impl Planner {
    /// Combines two resolvers.
    pub fn new(geo: GeoZoneResolver, hours: ScheduleDefaultsResolver) -> Self {
        Self { geo, hours }
    }

    /// Builds both resolvers from a configuration.
    pub fn from_config(config: &PlanningConfig) -> PlanningResult<Self> {
        let geo = GeoZoneResolver::new(config.reference.clone(), config.zones.clone())?;
        let hours = ScheduleDefaultsResolver::new(config.employers.clone())?;
        Ok(Self::new(geo, hours))
    }

    /// The zone resolver.
    pub fn geo(&self) -> &GeoZoneResolver {
        &self.geo
    }

    /// The hours resolver.
    pub fn hours(&self) -> &ScheduleDefaultsResolver {
        &self.hours
    }

    /// Default hours for `employer` on `day`.
    pub fn defaults(&self, employer: &str, day: NaiveDate) -> ScheduleDefaults {
        self.hours.resolve_defaults(employer, day)
    }

    /// Suggested zone for a destination.
    pub fn suggest_zone(&self, destination: Coordinate) -> PlanningResult<ZoneSuggestion> {
        self.geo.suggest_zone(destination)
    }

    /// Pre-filled event for `employer` on `day`.
    ///
    /// The draft keeps the employer name as entered; the zone is set only
    /// when a destination is known.
    ///
    /// # Errors
    /// `InvalidCoordinate` for an out-of-range destination.
    pub fn draft_event(
        &self,
        employer: &str,
        day: NaiveDate,
        destination: Option<Coordinate>,
    ) -> PlanningResult<EventDraft> {
        let defaults = self.hours.resolve_defaults(employer, day);
        let mut draft = EventDraft::from_defaults(employer.trim(), &defaults);
        if let Some(dest) = destination {
            let suggestion = self.geo.suggest_zone(dest)?;
            draft = draft.with_zone(suggestion.zone_label);
        }
        debug!(employer = %draft.employer, %day, zone = ?draft.zone_label, "event drafted");
        Ok(draft)
    }
}
