//! # Revocation Registry Facade
//!
//! Wires `AccessControl` and `RevocationStore` into the boundary the
//! external execution environment calls. Every mutating operation passes
//! through authorization before the store applies the transition; reads
//! bypass authorization entirely — status must be publicly verifiable.
//!
//! Successful mutations append their event to a pending queue. The
//! environment drains the queue with [`RevocationRegistry::drain_events`]
//! and delivers the events to subscribers; nothing inside the registry
//! consumes them.
//!
//! The registry holds no locks and spawns nothing. The environment is
//! expected to apply mutating calls serially (`&mut self`) in a single
//! total order; reads (`&self`) never block writers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crr_core::{Address, EpochDays, HolderId, RecordKey, RegistryError, RegistryEvent};

use crate::access::AccessControl;
use crate::store::{RevocationInfo, RevocationStore};

/// The revocation registry: authorization policy, record store, and
/// pending-event queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevocationRegistry {
    access: AccessControl,
    store: RevocationStore,
    pending_events: Vec<RegistryEvent>,
}

impl RevocationRegistry {
    /// Create a registry with its initial owner.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` if `owner` is the null address.
    pub fn new(owner: Address) -> Result<Self, RegistryError> {
        Ok(Self {
            access: AccessControl::new(owner)?,
            store: RevocationStore::new(),
            pending_events: Vec::new(),
        })
    }

    // ── Access-control operations ────────────────────────────────────

    /// The current owner.
    pub fn owner(&self) -> &Address {
        self.access.owner()
    }

    /// Grant publish/un-revoke rights to `address` (owner-only).
    pub fn add_publisher(
        &mut self,
        caller: &Address,
        address: Address,
    ) -> Result<(), RegistryError> {
        let event = self.access.add_publisher(caller, address.clone())?;
        info!(publisher = %address, "publisher added");
        self.pending_events.push(event);
        Ok(())
    }

    /// Remove publish/un-revoke rights from `address` (owner-only).
    pub fn remove_publisher(
        &mut self,
        caller: &Address,
        address: Address,
    ) -> Result<(), RegistryError> {
        let event = self.access.remove_publisher(caller, address.clone())?;
        info!(publisher = %address, "publisher removed");
        self.pending_events.push(event);
        Ok(())
    }

    /// Transfer ownership to `new_owner` (owner-only).
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        let event = self.access.transfer_ownership(caller, new_owner.clone())?;
        info!(new_owner = %new_owner, "ownership transferred");
        self.pending_events.push(event);
        Ok(())
    }

    // ── Mutating record operations ───────────────────────────────────

    /// Publish a revocation for `holder_id`.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` if the caller is neither owner nor publisher;
    /// `AlreadyPublished` if the holder's record is already REVOKED.
    pub fn publish(
        &mut self,
        caller: &Address,
        holder_id: &HolderId,
        epoch_days: EpochDays,
        evidence_pointer: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.require_authorized(caller)?;
        let key = RecordKey::derive(holder_id);
        let event = self.store.publish(key, epoch_days, evidence_pointer.into())?;
        info!(%key, %epoch_days, "revocation published");
        self.pending_events.push(event);
        Ok(())
    }

    /// Publish revocations for several holders, all-or-nothing.
    ///
    /// The three slices are positional: `holder_ids[i]` is revoked with
    /// `epochs[i]` and `evidence_pointers[i]`.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` for unauthorized callers; `LengthMismatch` if the
    /// slices differ in length; `AlreadyPublished` from any element, in
    /// which case no record changes and no event is queued.
    pub fn publish_batch(
        &mut self,
        caller: &Address,
        holder_ids: &[HolderId],
        epochs: &[EpochDays],
        evidence_pointers: &[String],
    ) -> Result<(), RegistryError> {
        self.require_authorized(caller)?;
        if holder_ids.len() != epochs.len() || holder_ids.len() != evidence_pointers.len() {
            return Err(RegistryError::LengthMismatch {
                holders: holder_ids.len(),
                epochs: epochs.len(),
                pointers: evidence_pointers.len(),
            });
        }
        let entries = holder_ids
            .iter()
            .zip(epochs)
            .zip(evidence_pointers)
            .map(|((holder, epoch), pointer)| (RecordKey::derive(holder), *epoch, pointer.clone()))
            .collect();
        let events = self.store.publish_batch(entries)?;
        info!(count = holder_ids.len(), "revocation batch published");
        self.pending_events.extend(events);
        Ok(())
    }

    /// Un-revoke the holder's record.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` for unauthorized callers; `NotRevoked` if the
    /// record is absent or already ACTIVE.
    pub fn unrevoke(
        &mut self,
        caller: &Address,
        holder_id: &HolderId,
    ) -> Result<(), RegistryError> {
        self.require_authorized(caller)?;
        let key = RecordKey::derive(holder_id);
        let event = self.store.unrevoke(key)?;
        info!(%key, "revocation lifted");
        self.pending_events.push(event);
        Ok(())
    }

    // ── Read operations (no authorization) ───────────────────────────

    /// Read the holder's record, reporting zero-valued defaults when the
    /// holder was never published.
    pub fn get_revocation_info(&self, holder_id: &HolderId) -> RevocationInfo {
        self.store.get(&RecordKey::derive(holder_id))
    }

    /// Whether the holder's credential is currently revoked (false for
    /// holders never published).
    pub fn is_revoked(&self, holder_id: &HolderId) -> bool {
        self.store.is_revoked(&RecordKey::derive(holder_id))
    }

    /// Check several holders at once, one boolean per holder in input
    /// order. Unknown holders report false; there is no partial failure.
    pub fn batch_check_revocation(&self, holder_ids: &[HolderId]) -> Vec<bool> {
        holder_ids.iter().map(|h| self.is_revoked(h)).collect()
    }

    // ── Event queue ──────────────────────────────────────────────────

    /// Take all pending events, oldest first, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// The pending events without draining them.
    pub fn pending_events(&self) -> &[RegistryEvent] {
        &self.pending_events
    }

    fn require_authorized(&self, caller: &Address) -> Result<(), RegistryError> {
        if !self.access.authorize(caller) {
            debug!(caller = %caller, "mutation rejected: caller not authorized");
            return Err(RegistryError::NotAuthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }
}
