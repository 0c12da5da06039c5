//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod alert;
pub mod dashboard;
pub mod equipment;
pub mod maintenance_event;
pub mod prediction;
pub mod sensor;
pub mod sensor_feature;
pub mod sensor_reading;
