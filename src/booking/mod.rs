mod conflict;
mod error;
mod mutations;
mod queries;

pub use conflict::{ConflictOutcome, detect};
pub use error::BookingError;
pub use mutations::ReserveOutcome;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::limits::{DEFAULT_MAX_ATTEMPTS, DEFAULT_STORE_TIMEOUT};
use crate::store::{StoreError, StoreGateway};

/// Coordinator tunables.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Optimistic retries after a guard rejection before giving up with
    /// `Contention`. Conflicts never retry; only guard rejections do.
    pub max_attempts: u32,
    /// Deadline for any single store call.
    pub store_timeout: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

/// Orchestrates check-then-commit against the store gateway. Holds no
/// mutable state of its own; every invocation runs to completion
/// independently, and the non-overlap invariant is enforced by the store's
/// guarded insert, not by anything in this process.
pub struct Coordinator {
    store: Arc<dyn StoreGateway>,
    config: CoordinatorConfig,
}

impl Coordinator {
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self::with_config(store, CoordinatorConfig::default())
    }

    pub fn with_config(store: Arc<dyn StoreGateway>, config: CoordinatorConfig) -> Self {
        Self { store, config }
    }

    pub(super) fn store(&self) -> &dyn StoreGateway {
        self.store.as_ref()
    }

    pub(super) fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// Run a store call under the configured deadline. Transport failures
    /// and deadline expiry surface unmodified; there is no cross-call retry
    /// for either.
    pub(super) async fn timed<T>(
        &self,
        call: &'static str,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, BookingError> {
        let started = std::time::Instant::now();
        let result = tokio::time::timeout(self.config.store_timeout, fut).await;
        metrics::histogram!(crate::observability::STORE_CALL_DURATION_SECONDS, "call" => call)
            .record(started.elapsed().as_secs_f64());
        match result {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(err.into()),
            Err(_) => Err(BookingError::Timeout(call)),
        }
    }
}
