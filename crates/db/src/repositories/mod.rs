//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod alert_repo;
pub mod dashboard_repo;
pub mod equipment_repo;
pub mod maintenance_event_repo;
pub mod prediction_repo;
pub mod sensor_feature_repo;
pub mod sensor_reading_repo;
pub mod sensor_repo;

pub use alert_repo::AlertRepo;
pub use dashboard_repo::DashboardRepo;
pub use equipment_repo::EquipmentRepo;
pub use maintenance_event_repo::MaintenanceEventRepo;
pub use prediction_repo::PredictionRepo;
pub use sensor_feature_repo::SensorFeatureRepo;
pub use sensor_reading_repo::SensorReadingRepo;
pub use sensor_repo::SensorRepo;
