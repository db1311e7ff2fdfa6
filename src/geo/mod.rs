//! Trip-zone resolution from distance to headquarters.
//!
//! # Algorithm
//!
//! 1. Great-circle distance from the reference point to the destination
//!    (haversine, mean Earth radius 6371 km).
//! 2. First band of the zone table whose inclusive upper bound is at or
//!    above that distance; the trailing unbounded band catches the rest.
//!
//! The zone is a suggestion: the planning screen pre-selects it and the
//! user may pick another before saving.
//!
//! # Reference
//! Sinnott (1984), "Virtues of the Haversine", Sky and Telescope 68(2)

mod resolver;

pub use resolver::{GeoZoneResolver, ZoneSuggestion};

use crate::error::PlanningResult;
use crate::models::Coordinate;

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in km.
///
/// Symmetric, non-negative, and exactly zero for identical points.
///
/// # Errors
/// `InvalidCoordinate` if either point is out of range.
///
/// # Example
///
/// ```
/// use workforce_planning::geo::distance_km;
/// use workforce_planning::models::Coordinate;
///
/// let paris = Coordinate::new(48.8566, 2.3522).unwrap();
/// let london = Coordinate::new(51.5074, -0.1278).unwrap();
/// let d = distance_km(paris, london).unwrap();
/// assert!((d - 343.56).abs() < 0.1);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> PlanningResult<f64> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_km(a, b))
}

fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h marginally past 1 for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}
