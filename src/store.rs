//! Store gateway contract and the in-memory reference store.
//!
//! The coordinator never talks to a storage engine directly; it sees only
//! this trait. The load-bearing call is [`StoreGateway::insert_guarded`]:
//! a write accepted only if the active set the caller observed is still
//! the active set, atomic per resource. Racing writers may live in different
//! processes, so in-process locking proves nothing; the guarantee has to
//! come from the store.

use async_trait::async_trait;
use dashmap::DashMap;
use ulid::Ulid;

use crate::model::{BookingRecord, BookingStatus, Ms, Revision};

/// Version stamp observed on a record at query time. The `(id, revision)`
/// pair, not the id alone, is what the guard compares; a record rewritten
/// in place keeps its id but not its revision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionStamp {
    pub id: String,
    pub revision: Revision,
}

impl VersionStamp {
    /// Stamp for a committed record. Returns `None` for a record the store
    /// never stamped, which the gateway contract forbids.
    pub fn of(record: &BookingRecord) -> Option<Self> {
        record.revision.clone().map(|revision| Self {
            id: record.id.clone(),
            revision,
        })
    }
}

/// Result of a guarded insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The guard held; the record is persisted and stamped.
    Committed(BookingRecord),
    /// Another writer changed the observed set first. Re-query and re-evaluate.
    GuardFailed,
}

/// Transport-level store failure. Guard rejection is not an error; it is
/// the [`InsertOutcome::GuardFailed`] outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(detail) => write!(f, "store unavailable: {detail}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Contract the coordinator requires from a booking store.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Active bookings on `resource_id` whose span starts before
    /// `start_before`. A coarse pre-filter the store can serve from an
    /// index; the caller still applies the exact overlap predicate.
    /// Returned records carry the revision issued at commit. Order is
    /// unspecified.
    async fn query_active(
        &self,
        resource_id: &str,
        start_before: Ms,
    ) -> Result<Vec<BookingRecord>, StoreError>;

    /// Commit `record` only if the active set under the same pre-filter
    /// (derived from `record.span.end`) still carries exactly the
    /// `observed` stamps. Must be atomic with respect to other guarded
    /// inserts on the same resource. Any record overlapping `record`
    /// necessarily starts before `record.span.end`, so every overlapping
    /// concurrent commit breaks the guard.
    async fn insert_guarded(
        &self,
        record: BookingRecord,
        observed: &[VersionStamp],
    ) -> Result<InsertOutcome, StoreError>;
}

// ── In-memory reference store ────────────────────────────────────

#[derive(Default)]
struct Shelf {
    records: Vec<BookingRecord>,
    seq: u64,
}

impl Shelf {
    fn stamps_before(&self, start_before: Ms) -> Vec<VersionStamp> {
        let mut stamps: Vec<VersionStamp> = self
            .records
            .iter()
            .filter(|r| r.status == BookingStatus::Active && r.span.start < start_before)
            .map(|r| VersionStamp::of(r).expect("memory store stamps every committed record"))
            .collect();
        stamps.sort();
        stamps
    }
}

/// In-memory [`StoreGateway`]. One shelf per resource; the map guard is
/// held across the whole check-and-insert, so guarded inserts on the same
/// resource serialize.
pub struct MemoryStore {
    shelves: DashMap<String, Shelf>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            shelves: DashMap::new(),
        }
    }

    /// All records on a resource, committed or cancelled. Test visibility.
    pub fn records(&self, resource_id: &str) -> Vec<BookingRecord> {
        self.shelves
            .get(resource_id)
            .map(|shelf| shelf.records.clone())
            .unwrap_or_default()
    }

    /// Flip an existing record to cancelled and restamp it. Models the
    /// out-of-core lifecycle transition so tests can exercise reads over
    /// mixed-status shelves.
    pub fn cancel(&self, resource_id: &str, booking_id: &str) -> bool {
        let Some(mut shelf) = self.shelves.get_mut(resource_id) else {
            return false;
        };
        let Some(pos) = shelf.records.iter().position(|r| r.id == booking_id) else {
            return false;
        };
        shelf.seq += 1;
        let revision = Revision::new(format!("{}-{}", shelf.seq, Ulid::new()));
        let record = &mut shelf.records[pos];
        record.status = BookingStatus::Cancelled;
        record.revision = Some(revision);
        true
    }
}

#[async_trait]
impl StoreGateway for MemoryStore {
    async fn query_active(
        &self,
        resource_id: &str,
        start_before: Ms,
    ) -> Result<Vec<BookingRecord>, StoreError> {
        let Some(shelf) = self.shelves.get(resource_id) else {
            return Ok(Vec::new());
        };
        Ok(shelf
            .records
            .iter()
            .filter(|r| r.status == BookingStatus::Active && r.span.start < start_before)
            .cloned()
            .collect())
    }

    async fn insert_guarded(
        &self,
        record: BookingRecord,
        observed: &[VersionStamp],
    ) -> Result<InsertOutcome, StoreError> {
        let mut shelf = self.shelves.entry(record.resource_id.clone()).or_default();

        let current = shelf.stamps_before(record.span.end);
        let mut expected = observed.to_vec();
        expected.sort();
        if current != expected {
            return Ok(InsertOutcome::GuardFailed);
        }

        shelf.seq += 1;
        let mut committed = record;
        committed.revision = Some(Revision::new(format!("{}-{}", shelf.seq, Ulid::new())));
        shelf.records.push(committed.clone());
        Ok(InsertOutcome::Committed(committed))
    }
}
