//! Route definitions for the `/predictions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::prediction;
use crate::state::AppState;

/// Routes mounted at `/predictions`.
///
/// ```text
/// GET    /        -> list (?equipment=, ?status= filters)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prediction::list).post(prediction::create))
        .route(
            "/{id}",
            get(prediction::get_by_id)
                .put(prediction::update)
                .delete(prediction::delete),
        )
}
