/// Primary key type for every table (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// All timestamps in the system are UTC; chrono serializes them as
/// RFC 3339 on the wire.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
