/// Primary keys are PostgreSQL BIGSERIAL across all tables.
pub type DbId = i64;

/// Timestamps are stored and exchanged as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
