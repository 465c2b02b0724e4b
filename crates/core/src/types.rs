/// Backend identifiers are opaque strings (the API does not guarantee
/// a numeric shape, only uniqueness).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
