//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `plantpulse_db`
//! and map errors via [`crate::error::AppError`].

pub mod alert;
pub mod dashboard;
pub mod equipment;
pub mod maintenance_event;
pub mod prediction;
pub mod sensor;
pub mod sensor_feature;
pub mod sensor_reading;
pub mod trend;
