// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: reservation attempts that reached a decision. Labels: outcome
/// (reserved | conflict | contention).
pub const RESERVATIONS_TOTAL: &str = "qsched_reservations_total";

/// Counter: read-path availability checks.
pub const AVAILABILITY_CHECKS_TOTAL: &str = "qsched_availability_checks_total";

/// Histogram: store call latency in seconds. Labels: call.
pub const STORE_CALL_DURATION_SECONDS: &str = "qsched_store_call_duration_seconds";

// ── Contention metrics ──────────────────────────────────────────

/// Counter: guarded inserts rejected because the observed set changed.
pub const GUARD_REJECTIONS_TOTAL: &str = "qsched_guard_rejections_total";

/// Histogram: attempts a successful reservation needed (1 = no contention).
pub const RESERVE_ATTEMPTS: &str = "qsched_reserve_attempts";
