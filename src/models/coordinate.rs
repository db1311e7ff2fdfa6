//! Geographic coordinates and the headquarters reference point.
//!
//! Degrees, WGS-84 style: latitude north-positive, longitude east-positive.
//! A `Coordinate` can hold any pair of floats so that values coming back
//! from a geocoder deserialize as-is; [`Coordinate::validate`] is what the
//! distance computation checks before using them.

use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, PlanningResult};

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// `InvalidCoordinate` when either component is out of range or NaN.
    pub fn new(latitude: f64, longitude: f64) -> PlanningResult<Self> {
        let c = Self {
            latitude,
            longitude,
        };
        c.validate()?;
        Ok(c)
    }

    /// Whether both components are finite and in range.
    pub fn is_valid(&self) -> bool {
        // NaN fails both range checks.
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Checks the range invariants.
    pub fn validate(&self) -> PlanningResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PlanningError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// The fixed point distances are measured from (company headquarters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Location.
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl ReferencePoint {
    /// Creates a reference point. Range is checked when a resolver is built.
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_coordinate_out_of_range() {
        assert!(matches!(
            Coordinate::new(90.5, 0.0),
            Err(PlanningError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            Coordinate::new(0.0, -180.01),
            Err(PlanningError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_coordinate_nan_rejected() {
        assert!(Coordinate::new(f64::NAN, 2.0).is_err());
        assert!(Coordinate::new(48.0, f64::NAN).is_err());
        assert!(Coordinate::new(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_reference_point_flattened() {
        let rp: ReferencePoint =
            serde_json::from_str(r#"{"name":"HQ","latitude":48.79,"longitude":2.45}"#).unwrap();
        assert_eq!(rp.name, "HQ");
        assert_eq!(rp.coordinate.latitude, 48.79);
        assert_eq!(rp.coordinate.longitude, 2.45);
    }
}
