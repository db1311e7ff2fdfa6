//! Trip zones and the distance band table.
//!
//! A zone table is an ordered list of bands, each covering distances up to
//! and including its `upper_km`. The last band is unbounded and catches
//! every distance beyond the finite ones. Zone order is band order, so
//! "closer zone" means "smaller band index".
//!
//! Structural rules (non-empty, unique labels, strictly increasing bounds,
//! single trailing catch-all) are enforced by
//! [`validate_zone_table`](crate::validation::validate_zone_table).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A trip zone label such as `"1A"` or `"15"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneLabel(String);

impl ZoneLabel {
    /// Creates a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One row of the zone table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceBand {
    /// Zone assigned to distances in this band.
    pub label: ZoneLabel,
    /// Inclusive upper bound in km. `None` = unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_km: Option<f64>,
}

impl DistanceBand {
    /// A band covering distances up to `upper_km` inclusive.
    pub fn bounded(label: impl Into<String>, upper_km: f64) -> Self {
        Self {
            label: ZoneLabel::new(label),
            upper_km: Some(upper_km),
        }
    }

    /// The catch-all band.
    pub fn unbounded(label: impl Into<String>) -> Self {
        Self {
            label: ZoneLabel::new(label),
            upper_km: None,
        }
    }

    /// Whether `distance_km` is at or below this band's bound.
    #[inline]
    pub fn covers(&self, distance_km: f64) -> bool {
        match self.upper_km {
            Some(upper) => distance_km <= upper,
            None => true,
        }
    }
}

/// Ordered distance bands, closest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneTable {
    bands: Vec<DistanceBand>,
}

impl ZoneTable {
    /// Creates a table from bands in distance order.
    pub fn new(bands: Vec<DistanceBand>) -> Self {
        Self { bands }
    }

    /// Appends a band.
    pub fn with_band(mut self, band: DistanceBand) -> Self {
        self.bands.push(band);
        self
    }

    /// The bands, closest first.
    pub fn bands(&self) -> &[DistanceBand] {
        &self.bands
    }

    /// Number of zones.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether the table has no bands.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Labels in distance order.
    pub fn labels(&self) -> impl Iterator<Item = &ZoneLabel> {
        self.bands.iter().map(|b| &b.label)
    }

    /// Position of `label` in distance order.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.bands.iter().position(|b| b.label.as_str() == label)
    }

    /// Index of the first band covering `distance_km`.
    ///
    /// Falls back to the last band when nothing covers it, which only
    /// happens for a table without a catch-all. `None` for an empty table.
    pub(crate) fn band_index_for(&self, distance_km: f64) -> Option<usize> {
        self.bands
            .iter()
            .position(|b| b.covers(distance_km))
            .or_else(|| self.bands.len().checked_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> ZoneTable {
        ZoneTable::new(vec![
            DistanceBand::bounded("near", 10.0),
            DistanceBand::bounded("mid", 50.0),
            DistanceBand::unbounded("far"),
        ])
    }

    #[test]
    fn test_band_covers_inclusive() {
        let band = DistanceBand::bounded("1A", 5.0);
        assert!(band.covers(0.0));
        assert!(band.covers(5.0));
        assert!(!band.covers(5.000_001));
        assert!(DistanceBand::unbounded("15").covers(1.0e9));
    }

    #[test]
    fn test_band_index_lookup() {
        let table = small_table();
        assert_eq!(table.band_index_for(0.0), Some(0));
        assert_eq!(table.band_index_for(10.0), Some(0));
        assert_eq!(table.band_index_for(10.5), Some(1));
        assert_eq!(table.band_index_for(5_000.0), Some(2));
        assert_eq!(ZoneTable::default().band_index_for(1.0), None);
    }

    #[test]
    fn test_index_of_and_labels() {
        let table = small_table();
        assert_eq!(table.index_of("mid"), Some(1));
        assert_eq!(table.index_of("nowhere"), None);
        let labels: Vec<&str> = table.labels().map(ZoneLabel::as_str).collect();
        assert_eq!(labels, vec!["near", "mid", "far"]);
    }

    #[test]
    fn test_catch_all_omits_bound_when_serialized() {
        let json = serde_json::to_string(&small_table()).unwrap();
        assert_eq!(
            json,
            r#"[{"label":"near","upper_km":10.0},{"label":"mid","upper_km":50.0},{"label":"far"}]"#
        );
    }
}
