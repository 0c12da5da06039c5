pub mod alert;
pub mod dashboard;
pub mod equipment;
pub mod health;
pub mod maintenance_event;
pub mod prediction;
pub mod reading;
pub mod sensor;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard/summary                   entity counts (GET)
/// /dashboard/fuel-mix                  fleet composition per fuel type (GET)
///
/// /equipment                           list, create
/// /equipment/{id}                      get (with sensors), update, delete
/// /equipment/{equipment_id}/sensors    list, create
///
/// /sensors                             list (joined with equipment name)
/// /sensors/{id}                        get, update, delete
/// /sensors/{id}/readings               series (GET), ingest (POST)
/// /sensors/{id}/features               list (GET), record (POST)
/// /sensors/{id}/trend                  trend + forecast + excursions (GET)
///
/// /readings                            latest across sensors (?sensor=)
///
/// /maintenance-events                  list (?equipment=), create
/// /maintenance-events/{id}             get, update, delete
///
/// /predictions                         list (?equipment=, ?status=), create
/// /predictions/{id}                    get, update, delete
///
/// /alerts                              list (?acknowledged=), create
/// /alerts/{id}                         get, update, delete
/// /alerts/{id}/acknowledge             set the flag (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Dashboard aggregates.
        .nest("/dashboard", dashboard::router())
        // Equipment routes (also nests per-equipment sensors).
        .nest("/equipment", equipment::router())
        // Flat sensor surface plus per-sensor time-series sub-resources.
        .nest("/sensors", sensor::router())
        // Latest readings across the whole fleet.
        .nest("/readings", reading::router())
        // Maintenance history.
        .nest("/maintenance-events", maintenance_event::router())
        // Fault predictions ingested from the modelling pipeline.
        .nest("/predictions", prediction::router())
        // Operator alerts.
        .nest("/alerts", alert::router())
}
