//! Planning value types.
//!
//! Everything here is a plain value: no identity, no persistence, no
//! mutation after a resolver is built. Tables (zones, employers) are data
//! handed to the resolvers, never module globals.
//!
//! | Type | Used by |
//! |------|---------|
//! | `Coordinate`, `ReferencePoint` | distance from headquarters |
//! | `ZoneLabel`, `DistanceBand`, `ZoneTable` | trip-zone lookup |
//! | `HoursWindow`, `EmployerProfile`, `EmployerTable` | default working hours |
//! | `ScheduleDefaults`, `HoursKind` | resolved hours for a day |
//! | `EventDraft` | pre-filled calendar event |

mod coordinate;
mod defaults;
mod employer;
mod event;
mod hours;
mod zone;

pub use coordinate::{Coordinate, ReferencePoint};
pub use defaults::{HoursKind, ScheduleDefaults};
pub use employer::{EmployerProfile, EmployerTable};
pub use event::EventDraft;
pub use hours::HoursWindow;
pub use zone::{DistanceBand, ZoneLabel, ZoneTable};

pub(crate) use employer::normalize_name;
