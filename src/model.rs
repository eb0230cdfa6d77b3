use serde::{Deserialize, Serialize};

use crate::booking::BookingError;
use crate::limits::*;

/// Unix milliseconds — the only time type.
pub type Ms = i64;

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Ms,
    pub end: Ms,
}

impl Span {
    pub fn new(start: Ms, end: Ms) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: Ms) -> bool {
        self.start <= t && t < self.end
    }
}

/// A requested time window on one resource. Conflict evaluation is always
/// scoped to a single `resource_id`; nothing is shared across resources.
///
/// Only constructible through [`Interval::new`], so every `Interval` in
/// circulation satisfies `start < end` and the crate limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub resource_id: String,
    pub span: Span,
}

impl Interval {
    pub fn new(resource_id: impl Into<String>, start: Ms, end: Ms) -> Result<Self, BookingError> {
        let resource_id = resource_id.into();
        if resource_id.is_empty() {
            return Err(BookingError::InvalidInterval("empty resource id"));
        }
        if start >= end {
            return Err(BookingError::InvalidInterval("start must precede end"));
        }
        if start < MIN_VALID_TIMESTAMP_MS || end > MAX_VALID_TIMESTAMP_MS {
            return Err(BookingError::InvalidInterval("timestamp out of range"));
        }
        if end - start > MAX_SPAN_DURATION_MS {
            return Err(BookingError::InvalidInterval("span too wide"));
        }
        Ok(Self {
            resource_id,
            span: Span { start, end },
        })
    }
}

/// Lifecycle state of a booking document. Cancellation itself is a separate
/// lifecycle transition outside this core; cancelled records may still come
/// back from a store and must never block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Active,
    Cancelled,
}

/// Opaque version token issued by the store when a record commits.
/// Compared only for equality; the ordering exists so stamp sets can be
/// sorted deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Revision(String);

impl Revision {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One reservation document. Created by the coordinator, stamped with a
/// revision by the store on commit, never mutated in place by this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub resource_id: String,
    pub user_id: String,
    pub priority: i64,
    pub span: Span,
    pub status: BookingStatus,
    /// `None` until the store has committed and stamped the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<Revision>,
}

impl BookingRecord {
    /// A fresh active record, not yet committed (no revision).
    pub fn new_active(
        id: impl Into<String>,
        interval: &Interval,
        user_id: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            id: id.into(),
            resource_id: interval.resource_id.clone(),
            user_id: user_id.into(),
            priority,
            span: interval.span,
            status: BookingStatus::Active,
            revision: None,
        }
    }
}

/// What an availability endpoint reports about the record blocking a
/// requested slot: who holds it, how strong the claim is, when it frees up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingSummary {
    pub user_id: String,
    pub priority: i64,
    pub end: Ms,
}

impl From<&BookingRecord> for BlockingSummary {
    fn from(record: &BookingRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            priority: record.priority,
            end: record.span.end,
        }
    }
}
