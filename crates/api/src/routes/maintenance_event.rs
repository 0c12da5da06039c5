//! Route definitions for the `/maintenance-events` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::maintenance_event;
use crate::state::AppState;

/// Routes mounted at `/maintenance-events`.
///
/// ```text
/// GET    /        -> list (?equipment= filter)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(maintenance_event::list).post(maintenance_event::create),
        )
        .route(
            "/{id}",
            get(maintenance_event::get_by_id)
                .put(maintenance_event::update)
                .delete(maintenance_event::delete),
        )
}
