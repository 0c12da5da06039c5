//! Route definitions for the `/alerts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::alert;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /                    -> list (?acknowledged= filter)
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// POST   /{id}/acknowledge    -> acknowledge
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alert::list).post(alert::create))
        .route(
            "/{id}",
            get(alert::get_by_id)
                .put(alert::update)
                .delete(alert::delete),
        )
        .route("/{id}/acknowledge", post(alert::acknowledge))
}
