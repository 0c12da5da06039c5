//! PlantPulse core domain logic.
//!
//! Pure types and computations shared by the database and API crates:
//! fuel-type vocabulary, domain validation, list paging rules, and the
//! sensor trend forecaster. Nothing in this crate performs I/O.

pub mod equipment;
pub mod error;
pub mod pagination;
pub mod prediction;
pub mod trend;
pub mod types;
