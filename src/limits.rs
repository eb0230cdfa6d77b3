use std::time::Duration;

use crate::model::Ms;

/// Earliest timestamp accepted (2000-01-01T00:00:00Z).
pub const MIN_VALID_TIMESTAMP_MS: Ms = 946_684_800_000;

/// Latest timestamp accepted (3000-01-01T00:00:00Z).
pub const MAX_VALID_TIMESTAMP_MS: Ms = 32_503_680_000_000;

/// Widest single reservation (31 days).
pub const MAX_SPAN_DURATION_MS: Ms = 31 * 24 * 3_600_000;

/// Guard-rejection retries before a reservation fails with Contention.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Deadline for any single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);
