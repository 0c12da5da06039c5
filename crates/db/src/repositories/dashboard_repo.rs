//! Aggregate queries backing the dashboard endpoints.

use sqlx::PgPool;

use crate::models::dashboard::{DashboardSummary, FuelMixRow};

/// Provides read-only aggregate queries across the whole schema.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Entity counts for the dashboard summary header.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        let query = "\
            SELECT \
                (SELECT COUNT(*) FROM equipment)::BIGINT AS equipment_count, \
                (SELECT COUNT(*) FROM sensors)::BIGINT AS sensor_count, \
                (SELECT COUNT(*) FROM sensor_readings)::BIGINT AS reading_count, \
                (SELECT COUNT(*) FROM predictions)::BIGINT AS prediction_count, \
                (SELECT COUNT(*) FROM alerts WHERE acknowledged = FALSE)::BIGINT \
                    AS unacknowledged_alert_count";
        sqlx::query_as::<_, DashboardSummary>(query)
            .fetch_one(pool)
            .await
    }

    /// Fleet composition per fuel type, largest installed capacity first.
    ///
    /// Units without a known capacity contribute 0 MW to their group.
    pub async fn fuel_mix(pool: &PgPool) -> Result<Vec<FuelMixRow>, sqlx::Error> {
        let query = "\
            SELECT \
                fuel_type, \
                COUNT(*)::BIGINT AS equipment_count, \
                COALESCE(SUM(capacity_mw), 0)::FLOAT8 AS total_capacity_mw \
            FROM equipment \
            GROUP BY fuel_type \
            ORDER BY total_capacity_mw DESC, fuel_type";
        sqlx::query_as::<_, FuelMixRow>(query).fetch_all(pool).await
    }
}
