//! Error type shared by the resolvers and the configuration loader.
//!
//! Every variant is a local validation failure: nothing here is transient,
//! so callers surface the message rather than retry. An unrecognized
//! employer name is deliberately absent from this list; it resolves to the
//! fallback profile.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias for planning operations.
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Errors raised by zone and hours resolution.
#[derive(Debug, Error)]
pub enum PlanningError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or NaN.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Negative or NaN distance passed to the zone lookup.
    #[error("invalid distance: {0} km")]
    InvalidDistance(f64),

    /// A day that is not a valid calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A clock time that does not exist (hour > 23 or minute > 59).
    #[error("invalid clock time: {hour:02}:{minute:02}")]
    InvalidHours { hour: u32, minute: u32 },

    /// Zone or employer tables failed validation.
    #[error("invalid planning tables: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// Configuration text could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for PlanningError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
