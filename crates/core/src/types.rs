/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Position of a row within its ordered collection.
pub type DisplayOrder = i32;

/// Largest order a client may set directly.
///
/// Inserts take `max + 1`, so the column must keep headroom below `i32::MAX`.
pub const MAX_DISPLAY_ORDER: DisplayOrder = 1_000_000_000;
