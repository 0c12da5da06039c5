//! Query parameter types shared across handler modules.
//!
//! Handlers that take extra filters (`?sensor=`, `?status=`, ...)
//! declare their own structs next to the handler; only the bare
//! `?limit=&offset=` pair lives here.

use serde::Deserialize;

/// Pagination as sent by the client. Raw values; handlers clamp them
/// before they reach a repository.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
