//! Response envelope for the dashboard aggregates.
//!
//! Entity endpoints return rows as bare JSON; the `/dashboard/*`
//! endpoints wrap their computed payloads in `{ "data": ... }` so the
//! frontend widgets share one unwrapping path.

use serde::Serialize;

/// The `{ "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
