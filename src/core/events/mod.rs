//! Event registration and attendance tracking
//!
//! The [`EventRegistry`] owns every event. Students reserve capacity slots
//! through [`EventRegistry::register`]; admins later confirm who showed up
//! through [`EventRegistry::mark_attendance`]. Both return the updated event
//! snapshot or a [`RegistryError`] naming the reason for rejection.

mod error;
mod registry;
mod seed;
mod stats;

pub use error::RegistryError;
pub use registry::EventRegistry;
pub use seed::mock_events;
pub use stats::{EventSummary, Participation, RegistryStats, percent_of};
