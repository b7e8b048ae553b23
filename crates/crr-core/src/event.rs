//! # Registry Events
//!
//! Serializable records of successful state changes, emitted for external
//! subscribers. The registry appends one event per successful mutating
//! call to a pending queue; the execution environment drains the queue
//! and delivers the events. Nothing inside the registry consumes them.

use serde::{Deserialize, Serialize};

use crate::epoch::EpochDays;
use crate::identity::Address;
use crate::key::RecordKey;
use crate::status::CredentialStatus;

/// An event emitted by a successful mutating registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A revocation was published (first publish or re-publish after an
    /// un-revoke).
    RevocationPublished {
        /// The holder's record key.
        key: RecordKey,
        /// The revocation epoch that was stored.
        epoch_days: EpochDays,
        /// The evidence pointer that was stored.
        evidence_pointer: String,
    },

    /// A record's status changed outside of a publish (un-revoke).
    StatusChanged {
        /// The holder's record key.
        key: RecordKey,
        /// The status after the transition.
        new_status: CredentialStatus,
        /// The record version after the transition.
        new_version: u64,
    },

    /// The owner granted publish rights to an address.
    PublisherAdded {
        /// The address that was granted rights.
        address: Address,
    },

    /// The owner removed publish rights from an address.
    PublisherRemoved {
        /// The address that lost rights.
        address: Address,
    },

    /// Registry ownership moved to a new address.
    OwnershipTransferred {
        /// The previous owner.
        old_owner: Address,
        /// The new owner.
        new_owner: Address,
    },
}
