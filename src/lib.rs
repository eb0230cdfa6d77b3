//! Conflict-safe time-slot reservation core for shared compute devices.
//!
//! The crate answers two questions: is `[start, end)` on this resource
//! free, and can this caller commit a reservation for it — correctly under
//! concurrent attempts from multiple processes. The non-overlap invariant
//! is enforced by pairing a pure conflict detector with a version-guarded
//! store insert; see [`booking::Coordinator`].

pub mod booking;
pub mod limits;
pub mod model;
pub mod observability;
pub mod request;
pub mod store;

pub use booking::{
    BookingError, ConflictOutcome, Coordinator, CoordinatorConfig, ReserveOutcome, detect,
};
pub use model::{BlockingSummary, BookingRecord, BookingStatus, Interval, Ms, Revision, Span};
pub use request::{AvailabilityRequest, ReserveRequest};
pub use store::{InsertOutcome, MemoryStore, StoreError, StoreGateway, VersionStamp};
