//! Zone lookup against an injected reference point and band table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::distance_km;
use crate::error::{PlanningError, PlanningResult};
use crate::models::{Coordinate, ReferencePoint, ZoneLabel, ZoneTable};
use crate::validation::{validate_reference, validate_zone_table};

/// Suggested zone for a destination, as offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSuggestion {
    /// Distance from the reference point (km).
    pub distance_km: f64,
    /// Suggested zone.
    pub zone_label: ZoneLabel,
    /// Position of the zone in distance order (0 = closest).
    pub zone_index: usize,
}

/// Maps destinations to trip zones.
///
/// Immutable once built; share it freely across threads.
///
/// # Example
///
/// ```
/// use workforce_planning::geo::GeoZoneResolver;
/// use workforce_planning::models::{Coordinate, DistanceBand, ReferencePoint, ZoneTable};
///
/// let hq = ReferencePoint::new("HQ", Coordinate::new(48.7904, 2.4556).unwrap());
/// let zones = ZoneTable::new(vec![
///     DistanceBand::bounded("1A", 5.0),
///     DistanceBand::bounded("1B", 10.0),
///     DistanceBand::unbounded("2"),
/// ]);
/// let resolver = GeoZoneResolver::new(hq, zones).unwrap();
///
/// assert_eq!(resolver.determine_zone(0.0).unwrap().as_str(), "1A");
/// assert_eq!(resolver.determine_zone(5.0).unwrap().as_str(), "1A");
/// assert_eq!(resolver.determine_zone(7.5).unwrap().as_str(), "1B");
/// assert_eq!(resolver.determine_zone(900.0).unwrap().as_str(), "2");
/// ```
#[derive(Debug, Clone)]
pub struct GeoZoneResolver {
    reference: ReferencePoint,
    zones: ZoneTable,
}

impl GeoZoneResolver {
    /// Creates a resolver after validating both tables.
    ///
    /// # Errors
    /// `Validation` listing every problem found.
    pub fn new(reference: ReferencePoint, zones: ZoneTable) -> PlanningResult<Self> {
        let mut errors = Vec::new();
        if let Err(mut e) = validate_reference(&reference) {
            errors.append(&mut e);
        }
        if let Err(mut e) = validate_zone_table(&zones) {
            errors.append(&mut e);
        }
        if !errors.is_empty() {
            return Err(PlanningError::Validation(errors));
        }
        Ok(Self { reference, zones })
    }

    /// The reference point.
    pub fn reference(&self) -> &ReferencePoint {
        &self.reference
    }

    /// The zone table.
    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    /// Distance from the reference point to `destination` (km).
    pub fn distance_from_reference(&self, destination: Coordinate) -> PlanningResult<f64> {
        distance_km(self.reference.coordinate, destination)
    }

    /// Index of the zone covering `distance_km`.
    ///
    /// Non-decreasing in `distance_km`.
    ///
    /// # Errors
    /// `InvalidDistance` for negative or NaN input.
    pub fn determine_zone_index(&self, distance_km: f64) -> PlanningResult<usize> {
        // NaN fails this comparison too.
        if !(distance_km >= 0.0) {
            return Err(PlanningError::InvalidDistance(distance_km));
        }
        // Construction guarantees a non-empty table ending in a catch-all.
        Ok(self.zones.band_index_for(distance_km).unwrap_or(0))
    }

    /// Zone covering `distance_km`. Boundary distances belong to the closer zone.
    ///
    /// # Errors
    /// `InvalidDistance` for negative or NaN input.
    pub fn determine_zone(&self, distance_km: f64) -> PlanningResult<&ZoneLabel> {
        let idx = self.determine_zone_index(distance_km)?;
        Ok(&self.zones.bands()[idx].label)
    }

    /// Distance and zone for a geocoded destination.
    pub fn suggest_zone(&self, destination: Coordinate) -> PlanningResult<ZoneSuggestion> {
        let distance_km = self.distance_from_reference(destination)?;
        let zone_index = self.determine_zone_index(distance_km)?;
        let zone_label = self.zones.bands()[zone_index].label.clone();

        debug!(
            latitude = destination.latitude,
            longitude = destination.longitude,
            distance_km,
            zone = %zone_label,
            "zone suggested"
        );

        Ok(ZoneSuggestion {
            distance_km,
            zone_label,
            zone_index,
        })
    }
}
