//! # Revocation Epochs — Day-Count Timestamps
//!
//! Defines `EpochDays`, the day-granularity timestamp after which a
//! credential is considered revoked.
//!
//! The registry stores and returns the day-count verbatim; its operation
//! paths perform no calendar conversion. The `from_date`/`to_date` pair
//! exists for callers that hold calendar dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A day-count since the Unix epoch (1970-01-01).
///
/// Meaningful only while a record is (or was) REVOKED. The zero value is
/// the read-contract default for records that were never published.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EpochDays(u32);

impl EpochDays {
    /// Wrap a raw day-count.
    pub fn new(days: u32) -> Self {
        Self(days)
    }

    /// The raw day-count.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Convert a calendar date to a day-count.
    ///
    /// Returns `None` for dates before 1970-01-01 or beyond the `u32`
    /// day range. This is a caller convenience; the registry itself
    /// never converts.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
        let days = date.signed_duration_since(epoch).num_days();
        u32::try_from(days).ok().map(Self)
    }

    /// Convert the day-count back to a calendar date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
        epoch.checked_add_days(chrono::Days::new(u64::from(self.0)))
    }
}

impl std::fmt::Display for EpochDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
