//! Planning tables loaded from TOML.
//!
//! The reference point, zone bands and employer hours are configuration
//! data. A standard set ships with the crate (`config/planning.toml`,
//! embedded at compile time); deployments and tests may load their own.
//!
//! ```toml
//! [reference]
//! name = "HQ"
//! latitude = 48.79
//! longitude = 2.45
//!
//! [[zones]]
//! label = "near"
//! upper_km = 10.0
//!
//! [[zones]]
//! label = "far"
//!
//! [employers.fallback]
//! name = "DEFAULT"
//! normal_hours = { start = "08:00", end = "17:00" }
//! friday_hours = { start = "08:00", end = "16:00" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlanningError, PlanningResult};
use crate::models::{EmployerTable, ReferencePoint, ZoneTable};
use crate::validation::validate_config;

const BUILTIN: &str = include_str!("../config/planning.toml");

/// Complete set of planning tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Headquarters.
    pub reference: ReferencePoint,
    /// Trip zones, closest first.
    pub zones: ZoneTable,
    /// Employer working hours.
    pub employers: EmployerTable,
}

impl PlanningConfig {
    /// The standard tables shipped with the crate.
    pub fn builtin() -> PlanningResult<Self> {
        Self::from_toml_str(BUILTIN)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> PlanningResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        debug!(
            reference = %config.reference.name,
            zones = config.zones.len(),
            employers = config.employers.profiles.len(),
            "planning tables loaded"
        );
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> PlanningResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PlanningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks every table.
    pub fn validate(&self) -> PlanningResult<()> {
        validate_config(self).map_err(PlanningError::Validation)
    }
}
