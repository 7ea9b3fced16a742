//! Weekly class timetabling for the U-Engine ecosystem.
//!
//! Places a catalogue of subjects (including double-period labs) onto a
//! Monday–Saturday period grid, keeping staff free of clashes where it
//! can and falling back to deterministic placement where it cannot.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Staff`, `Subject`, `ScheduleConfiguration`,
//!   `TimeSlot`, `Timetable`, `StaffCommitments`
//! - **`scheduler`**: `Timetabler` (generation) and `PlacementReport`
//! - **`validation`**: Advisory input checks (duplicate IDs, staff refs, grid fit)
//! - **`store`**: `TimetableStore`, the owning catalogue/timetable service
//! - **`config`**: TOML configuration loading
//!
//! # Architecture
//!
//! Generation is a pure, synchronous function of its request. The random
//! source is a type parameter (`R: rand::Rng`), so tests pass a seeded
//! generator and production uses the thread RNG or a configured seed.

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use config::TimetableConfig;
pub use error::{ConfigError, TimetableError};
pub use scheduler::{PlacementReport, TimetableRequest, Timetabler, TimetablerOptions};
pub use store::TimetableStore;
