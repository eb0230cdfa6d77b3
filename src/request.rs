//! Wire-shaped request types.
//!
//! The HTTP layer (external to this crate) decodes straight into these;
//! `validate` promotes them to domain types before anything touches the
//! store, so a malformed request costs zero store calls.

use serde::Deserialize;

use crate::booking::BookingError;
use crate::model::{Interval, Ms};

/// Raw reservation request. Every field optional until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReserveRequest {
    pub resource_id: Option<String>,
    pub user_id: Option<String>,
    pub start: Option<Ms>,
    pub end: Option<Ms>,
    pub priority: Option<i64>,
}

/// Validated reservation parameters.
#[derive(Debug, Clone)]
pub struct ReserveParams {
    pub interval: Interval,
    pub user_id: String,
    pub priority: i64,
}

impl ReserveRequest {
    pub fn validate(self) -> Result<ReserveParams, BookingError> {
        let resource_id = self
            .resource_id
            .ok_or(BookingError::MissingField("resource_id"))?;
        let user_id = self.user_id.ok_or(BookingError::MissingField("user_id"))?;
        let start = self.start.ok_or(BookingError::MissingField("start"))?;
        let end = self.end.ok_or(BookingError::MissingField("end"))?;
        let priority = self.priority.ok_or(BookingError::MissingField("priority"))?;
        Ok(ReserveParams {
            interval: Interval::new(resource_id, start, end)?,
            user_id,
            priority,
        })
    }
}

/// Raw availability query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityRequest {
    pub resource_id: Option<String>,
    pub start: Option<Ms>,
    pub end: Option<Ms>,
}

impl AvailabilityRequest {
    pub fn validate(self) -> Result<Interval, BookingError> {
        let resource_id = self
            .resource_id
            .ok_or(BookingError::MissingField("resource_id"))?;
        let start = self.start.ok_or(BookingError::MissingField("start"))?;
        let end = self.end.ok_or(BookingError::MissingField("end"))?;
        Interval::new(resource_id, start, end)
    }
}
