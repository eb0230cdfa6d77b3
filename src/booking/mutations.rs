use tracing::{debug, info, warn};
use ulid::Ulid;

use crate::model::BookingRecord;
use crate::request::ReserveRequest;
use crate::store::{InsertOutcome, VersionStamp};

use super::conflict::{ConflictOutcome, detect};
use super::{BookingError, Coordinator};

/// Result of a reservation attempt that reached a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// Committed; the record carries the store-issued revision.
    Reserved(BookingRecord),
    /// The slot is taken; carries the blocking record.
    Conflict(BookingRecord),
}

impl Coordinator {
    /// Check-then-commit under a bounded optimistic retry loop.
    ///
    /// Each attempt queries the resource's active set, evaluates the exact
    /// overlap predicate, and, if the slot is free, asks the store for a
    /// guarded insert keyed on the version stamps just observed. A guard
    /// rejection means another writer committed first: re-query and
    /// re-evaluate rather than reporting a stale answer. A `Conflict` is
    /// returned immediately with no retry; that outcome is stable until
    /// the blocking booking itself changes.
    ///
    /// Not idempotent: every call that observes an available slot creates
    /// a new distinct record. If the caller drops the future mid-flight, a
    /// write that already reached the store stands; the guard still admits
    /// at most one winner among racing attempts.
    pub async fn reserve(
        &self,
        request: ReserveRequest,
    ) -> Result<ReserveOutcome, BookingError> {
        let params = request.validate()?;
        let candidate = &params.interval;

        for attempt in 1..=self.max_attempts() {
            let active = self.snapshot(candidate).await?;

            if let ConflictOutcome::Conflict(blocking) = detect(candidate, &active) {
                debug!(
                    resource = %candidate.resource_id,
                    blocking = %blocking.id,
                    "slot blocked"
                );
                metrics::counter!(crate::observability::RESERVATIONS_TOTAL, "outcome" => "conflict")
                    .increment(1);
                return Ok(ReserveOutcome::Conflict(blocking));
            }

            let observed: Vec<VersionStamp> =
                active.iter().filter_map(VersionStamp::of).collect();
            let record = BookingRecord::new_active(
                format!("booking:{}", Ulid::new()),
                candidate,
                &params.user_id,
                params.priority,
            );

            match self
                .timed(
                    "insert_guarded",
                    self.store().insert_guarded(record, &observed),
                )
                .await?
            {
                InsertOutcome::Committed(committed) => {
                    info!(
                        booking = %committed.id,
                        resource = %committed.resource_id,
                        user = %committed.user_id,
                        "reservation committed"
                    );
                    metrics::counter!(crate::observability::RESERVATIONS_TOTAL, "outcome" => "reserved")
                        .increment(1);
                    metrics::histogram!(crate::observability::RESERVE_ATTEMPTS)
                        .record(attempt as f64);
                    return Ok(ReserveOutcome::Reserved(committed));
                }
                InsertOutcome::GuardFailed => {
                    debug!(
                        resource = %candidate.resource_id,
                        attempt,
                        "guard rejected, re-reading active set"
                    );
                    metrics::counter!(crate::observability::GUARD_REJECTIONS_TOTAL).increment(1);
                }
            }
        }

        let attempts = self.max_attempts();
        warn!(
            resource = %candidate.resource_id,
            attempts,
            "retry budget exhausted under write contention"
        );
        metrics::counter!(crate::observability::RESERVATIONS_TOTAL, "outcome" => "contention")
            .increment(1);
        Err(BookingError::Contention { attempts })
    }
}
