//! Route definitions for the `/equipment` resource.
//!
//! Also nests sensor routes under `/equipment/{equipment_id}/sensors`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{equipment, sensor};
use crate::state::AppState;

/// Routes mounted at `/equipment`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id (with sensors)
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
///
/// GET    /{equipment_id}/sensors      -> list_by_equipment
/// POST   /{equipment_id}/sensors      -> create
/// ```
pub fn router() -> Router<AppState> {
    let sensor_routes =
        Router::new().route("/", get(sensor::list_by_equipment).post(sensor::create));

    Router::new()
        .route("/", get(equipment::list).post(equipment::create))
        .route(
            "/{id}",
            get(equipment::get_by_id)
                .put(equipment::update)
                .delete(equipment::delete),
        )
        .nest("/{equipment_id}/sensors", sensor_routes)
}
