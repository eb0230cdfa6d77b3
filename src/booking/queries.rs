use tracing::debug;

use crate::model::{BookingRecord, Interval};
use crate::request::AvailabilityRequest;

use super::conflict::{ConflictOutcome, detect};
use super::{BookingError, Coordinator};

impl Coordinator {
    /// Read-path availability check: query the resource's active set and
    /// evaluate the exact overlap predicate. No writes, no retries.
    pub async fn check_availability(
        &self,
        request: AvailabilityRequest,
    ) -> Result<ConflictOutcome, BookingError> {
        let candidate = request.validate()?;
        let active = self.snapshot(&candidate).await?;
        metrics::counter!(crate::observability::AVAILABILITY_CHECKS_TOTAL).increment(1);
        Ok(detect(&candidate, &active))
    }

    /// Active bookings that could overlap `candidate`, per the store's
    /// start-time pre-filter. The exact check is still [`detect`]'s job.
    pub(super) async fn snapshot(
        &self,
        candidate: &Interval,
    ) -> Result<Vec<BookingRecord>, BookingError> {
        let active = self
            .timed(
                "query_active",
                self.store()
                    .query_active(&candidate.resource_id, candidate.span.end),
            )
            .await?;
        debug!(
            resource = %candidate.resource_id,
            n_active = active.len(),
            "queried active set"
        );
        Ok(active)
    }
}
