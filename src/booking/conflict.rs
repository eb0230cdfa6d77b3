use crate::model::{BookingRecord, BookingStatus, Interval};

/// Outcome of evaluating a candidate interval against a resource's active set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictOutcome {
    Available,
    /// The blocking record: of everything overlapping the candidate, the
    /// booking with the highest priority — the claim that dominates the slot.
    Conflict(BookingRecord),
}

/// Pure conflict evaluation. Applies the exact two-sided overlap predicate
/// to every record; the store's start-time pre-filter is an optimization,
/// never a substitute. Selection is independent of input order: highest
/// priority wins, ties broken by earliest start, then by id.
///
/// Caller guarantees all records share `candidate.resource_id` (the query
/// that produced them is filtered by resource).
pub fn detect(candidate: &Interval, active: &[BookingRecord]) -> ConflictOutcome {
    debug_assert!(
        active.iter().all(|r| r.resource_id == candidate.resource_id),
        "active set crosses resources"
    );

    let mut blocking: Option<&BookingRecord> = None;
    for record in active {
        if record.status != BookingStatus::Active {
            continue;
        }
        if !record.span.overlaps(&candidate.span) {
            continue;
        }
        match blocking {
            Some(current) if !dominates(record, current) => {}
            _ => blocking = Some(record),
        }
    }

    match blocking {
        Some(record) => ConflictOutcome::Conflict(record.clone()),
        None => ConflictOutcome::Available,
    }
}

/// Total order over conflicting records: true if `a` outranks `b`.
fn dominates(a: &BookingRecord, b: &BookingRecord) -> bool {
    if a.priority != b.priority {
        return a.priority > b.priority;
    }
    if a.span.start != b.span.start {
        return a.span.start < b.span.start;
    }
    a.id < b.id
}
