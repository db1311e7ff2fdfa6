//! Planning core for workforce scheduling.
//!
//! Pure computations behind the planning screen: which trip zone a job
//! site falls in, and which hours a new event should default to for a
//! given employer and day. Persistence, geocoding and the UI itself are
//! the caller's concern; everything here is a deterministic function of
//! its inputs and the tables injected at construction.
//!
//! # Modules
//!
//! - **`models`**: Value types: `Coordinate`, `ZoneTable`, `HoursWindow`,
//!   `EmployerProfile`, `ScheduleDefaults`, `EventDraft`
//! - **`geo`**: Haversine distance and `GeoZoneResolver`
//! - **`hours`**: `ScheduleDefaultsResolver` (Friday vs. normal hours)
//! - **`planner`**: `Planner`, both resolvers behind one event-drafting call
//! - **`config`**: TOML tables, with the standard set embedded
//! - **`validation`**: Table integrity checks (band order, catch-all, hours)
//! - **`error`**: `PlanningError`
//! - **`logging`**: `tracing` subscriber setup for host applications
//!
//! # Concurrency
//!
//! Resolvers are immutable after construction and `Send + Sync`; no call
//! blocks, performs I/O, or reads the clock.

pub mod config;
pub mod error;
pub mod geo;
pub mod hours;
pub mod logging;
pub mod models;
pub mod planner;
pub mod validation;

pub use config::PlanningConfig;
pub use error::{PlanningError, PlanningResult};
pub use geo::{distance_km, GeoZoneResolver, ZoneSuggestion};
pub use hours::ScheduleDefaultsResolver;
pub use planner::Planner;
