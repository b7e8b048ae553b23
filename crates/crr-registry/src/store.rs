//! # Revocation Store — Per-Holder Record Transitions
//!
//! Holds one record per record key and implements the publish and
//! un-revoke transitions with their preconditions. Authorization is the
//! facade's job (`registry.rs`); the store assumes the caller has already
//! been cleared and enforces only record-level invariants:
//!
//! - a record's version starts at 1 on first publish and increments by
//!   exactly 1 on every successful transition;
//! - publishing onto a record that is already REVOKED is rejected;
//! - un-revoking requires an existing REVOKED record;
//! - records are never deleted.
//!
//! Absence is represented internally as a missing map entry; the public
//! read contract reports zero-valued defaults for compatibility.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crr_core::{CredentialStatus, EpochDays, RecordKey, RegistryError, RegistryEvent};

/// The stored state of one holder's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationRecord {
    /// Current validity status.
    pub status: CredentialStatus,
    /// Revocation epoch; meaningful only while the record is (or was)
    /// REVOKED. Retained across un-revoke as audit residue.
    pub epoch_days: EpochDays,
    /// Opaque locator for off-chain evidence. Never interpreted here.
    pub evidence_pointer: String,
    /// Monotonic transition counter, 1 on first publish.
    pub version: u64,
}

/// The public read view of a holder's record.
///
/// For a holder that was never published this reports the compatibility
/// defaults: epoch 0, empty pointer, version 0, status ACTIVE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationInfo {
    /// Revocation epoch (0 if never published).
    pub epoch_days: EpochDays,
    /// Evidence pointer (empty if never published).
    pub evidence_pointer: String,
    /// Record version (0 if never published).
    pub version: u64,
    /// Current status (ACTIVE if never published).
    pub status: CredentialStatus,
}

impl Default for RevocationInfo {
    fn default() -> Self {
        Self {
            epoch_days: EpochDays::new(0),
            evidence_pointer: String::new(),
            version: 0,
            status: CredentialStatus::Active,
        }
    }
}

/// The record map with its transition rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevocationStore {
    records: HashMap<RecordKey, RevocationRecord>,
}

impl RevocationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a revocation into the holder's record slot.
    ///
    /// An absent record is created at version 1; an ACTIVE record
    /// (previously un-revoked) is overwritten and flipped back to
    /// REVOKED with its version incremented. Any epoch value is
    /// accepted on re-publish, including one earlier than the prior
    /// revocation epoch.
    ///
    /// # Errors
    ///
    /// `AlreadyPublished` if the record is already REVOKED.
    pub fn publish(
        &mut self,
        key: RecordKey,
        epoch_days: EpochDays,
        evidence_pointer: String,
    ) -> Result<RegistryEvent, RegistryError> {
        Self::apply_publish(&mut self.records, key, epoch_days, evidence_pointer)
    }

    /// Publish a batch of revocations, all-or-nothing.
    ///
    /// Transitions are applied to a staged copy of the record map in
    /// input order; the copy replaces the committed map only if every
    /// element succeeds. A duplicate holder within one batch therefore
    /// fails its second element with `AlreadyPublished` and aborts the
    /// whole batch.
    ///
    /// Returns the events for all elements, in input order.
    pub fn publish_batch(
        &mut self,
        entries: Vec<(RecordKey, EpochDays, String)>,
    ) -> Result<Vec<RegistryEvent>, RegistryError> {
        let mut staged = self.records.clone();
        let mut events = Vec::with_capacity(entries.len());
        for (key, epoch_days, evidence_pointer) in entries {
            events.push(Self::apply_publish(&mut staged, key, epoch_days, evidence_pointer)?);
        }
        self.records = staged;
        Ok(events)
    }

    /// Un-revoke the holder's record.
    ///
    /// The epoch and evidence pointer are retained unchanged as audit
    /// residue of the prior revocation; only the status flips and the
    /// version increments.
    ///
    /// # Errors
    ///
    /// `NotRevoked` if the record is absent or already ACTIVE.
    pub fn unrevoke(&mut self, key: RecordKey) -> Result<RegistryEvent, RegistryError> {
        let record = self
            .records
            .get_mut(&key)
            .ok_or(RegistryError::NotRevoked { key, state: "absent" })?;
        if !record.status.is_revoked() {
            return Err(RegistryError::NotRevoked { key, state: "ACTIVE" });
        }
        record.status = CredentialStatus::Active;
        record.version += 1;
        Ok(RegistryEvent::StatusChanged {
            key,
            new_status: CredentialStatus::Active,
            new_version: record.version,
        })
    }

    /// Read the holder's record, reporting defaults when absent.
    pub fn get(&self, key: &RecordKey) -> RevocationInfo {
        match self.records.get(key) {
            Some(record) => RevocationInfo {
                epoch_days: record.epoch_days,
                evidence_pointer: record.evidence_pointer.clone(),
                version: record.version,
                status: record.status,
            },
            None => RevocationInfo::default(),
        }
    }

    /// Whether the holder's record is currently REVOKED (false when
    /// absent).
    pub fn is_revoked(&self, key: &RecordKey) -> bool {
        self.records
            .get(key)
            .is_some_and(|record| record.status.is_revoked())
    }

    /// Number of records ever published.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record was ever published.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn apply_publish(
        records: &mut HashMap<RecordKey, RevocationRecord>,
        key: RecordKey,
        epoch_days: EpochDays,
        evidence_pointer: String,
    ) -> Result<RegistryEvent, RegistryError> {
        match records.get_mut(&key) {
            None => {
                records.insert(
                    key,
                    RevocationRecord {
                        status: CredentialStatus::Revoked,
                        epoch_days,
                        evidence_pointer: evidence_pointer.clone(),
                        version: 1,
                    },
                );
            }
            Some(record) if record.status.is_revoked() => {
                return Err(RegistryError::AlreadyPublished { key });
            }
            Some(record) => {
                record.status = CredentialStatus::Revoked;
                record.epoch_days = epoch_days;
                record.evidence_pointer = evidence_pointer.clone();
                record.version += 1;
            }
        }
        Ok(RegistryEvent::RevocationPublished {
            key,
            epoch_days,
            evidence_pointer,
        })
    }
}
