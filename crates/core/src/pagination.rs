//! List-endpoint paging.
//!
//! Every list query accepts an optional `?limit=&offset=` pair. `page_window`
//! normalizes that pair into SQL-safe values so repositories can bind them
//! directly into `LIMIT`/`OFFSET` clauses.

/// Rows returned by a list endpoint when the caller does not ask for a limit.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Hard ceiling on rows per page.
pub const MAX_PAGE_LIMIT: i64 = 500;

/// Normalize an optional `limit`/`offset` pair into a SQL-safe page window.
///
/// The limit falls back to [`DEFAULT_PAGE_LIMIT`] and is clamped to
/// `1..=MAX_PAGE_LIMIT`; the offset falls back to `0` and is never negative.
pub fn page_window(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}
