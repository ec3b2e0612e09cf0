//! Core functionality for the tracker
//!
//! This module contains the domain types and the stores that own them.

pub mod clock;
pub mod dashboard;
pub mod directory;
pub mod events;
pub mod models;

pub use clock::{Clock, MockClock, SystemClock};
pub use dashboard::{AlumniStats, Dashboard};
pub use directory::{LeaderboardEntry, UserDirectory};
pub use events::{EventRegistry, RegistryError};
