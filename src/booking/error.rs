use crate::store::StoreError;

/// Every failure path in the core maps to one of these kinds. A conflicting
/// booking is not an error; it is the `Conflict` outcome, carrying the
/// blocking record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Malformed interval: zero-length, inverted, out of range, too wide.
    InvalidInterval(&'static str),
    /// A required request field was absent. Rejected before any store access.
    MissingField(&'static str),
    /// The store gateway is unreachable or misconfigured. Not retried here.
    StoreUnavailable(String),
    /// A store call exceeded its deadline. Names the call.
    Timeout(&'static str),
    /// The optimistic retry budget ran out under sustained write contention.
    Contention { attempts: u32 },
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::InvalidInterval(reason) => write!(f, "invalid interval: {reason}"),
            BookingError::MissingField(field) => write!(f, "missing required field: {field}"),
            BookingError::StoreUnavailable(detail) => write!(f, "store unavailable: {detail}"),
            BookingError::Timeout(call) => write!(f, "store call timed out: {call}"),
            BookingError::Contention { attempts } => {
                write!(f, "guard rejected all {attempts} attempts: resource under write contention")
            }
        }
    }
}

impl std::error::Error for BookingError {}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(detail) => BookingError::StoreUnavailable(detail),
        }
    }
}
