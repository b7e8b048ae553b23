//! # Access Control — Owner and Delegated Publishers
//!
//! Gates every mutating registry operation by caller identity. Two tiers:
//! a single owner (set at construction, transferable only by the current
//! owner) and a set of delegated publishers. The owner is implicitly
//! authorized for publish/un-revoke regardless of set membership;
//! publisher-set and ownership management is owner-only.
//!
//! Caller identity is always an explicit parameter — there is no ambient
//! "current caller" context.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crr_core::{Address, RegistryError, RegistryEvent};

/// The authorization policy state: one owner, any number of publishers.
///
/// Mutations return the event to emit on success; the caller (the
/// registry facade) queues it for external subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessControl {
    owner: Address,
    publishers: BTreeSet<Address>,
}

impl AccessControl {
    /// Create the policy with its initial owner.
    ///
    /// Construction is the one-shot initialization point; ownership of
    /// the value guarantees it runs exactly once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if `owner` is the null address.
    pub fn new(owner: Address) -> Result<Self, RegistryError> {
        if owner.is_null() {
            return Err(RegistryError::InvalidAddress { role: "owner" });
        }
        Ok(Self {
            owner,
            publishers: BTreeSet::new(),
        })
    }

    /// The current owner.
    pub fn owner(&self) -> &Address {
        &self.owner
    }

    /// Whether `caller` may publish or un-revoke.
    pub fn authorize(&self, caller: &Address) -> bool {
        *caller == self.owner || self.publishers.contains(caller)
    }

    /// Grant publish/un-revoke rights to `address` (owner-only).
    ///
    /// # Errors
    ///
    /// `NotOwner` if the caller is not the owner; `InvalidAddress` if
    /// `address` is null.
    pub fn add_publisher(
        &mut self,
        caller: &Address,
        address: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        self.require_owner(caller)?;
        if address.is_null() {
            return Err(RegistryError::InvalidAddress { role: "publisher" });
        }
        self.publishers.insert(address.clone());
        Ok(RegistryEvent::PublisherAdded { address })
    }

    /// Remove publish/un-revoke rights from `address` (owner-only).
    ///
    /// Removal is unconditional: removing an address that was never a
    /// publisher is not an error.
    pub fn remove_publisher(
        &mut self,
        caller: &Address,
        address: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        self.require_owner(caller)?;
        self.publishers.remove(&address);
        Ok(RegistryEvent::PublisherRemoved { address })
    }

    /// Transfer ownership to `new_owner` (owner-only).
    ///
    /// # Errors
    ///
    /// `NotOwner` if the caller is not the owner; `InvalidAddress` if
    /// `new_owner` is null.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        self.require_owner(caller)?;
        if new_owner.is_null() {
            return Err(RegistryError::InvalidAddress { role: "owner" });
        }
        let old_owner = std::mem::replace(&mut self.owner, new_owner.clone());
        Ok(RegistryEvent::OwnershipTransferred {
            old_owner,
            new_owner,
        })
    }

    /// Validate that the caller is the current owner.
    fn require_owner(&self, caller: &Address) -> Result<(), RegistryError> {
        if *caller != self.owner {
            return Err(RegistryError::NotOwner {
                caller: caller.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Address {
        Address::new("issuer-root")
    }

    fn make_policy() -> AccessControl {
        AccessControl::new(owner()).unwrap()
    }

    #[test]
    fn test_null_owner_rejected() {
        let result = AccessControl::new(Address::new(""));
        assert_eq!(result.unwrap_err(), RegistryError::InvalidAddress { role: "owner" });
    }

    #[test]
    fn test_owner_is_authorized() {
        let ac = make_policy();
        assert!(ac.authorize(&owner()));
    }

    #[test]
    fn test_stranger_is_not_authorized() {
        let ac = make_policy();
        assert!(!ac.authorize(&Address::new("mallory")));
    }

    #[test]
    fn test_added_publisher_is_authorized() {
        let mut ac = make_policy();
        let pub1 = Address::new("publisher-1");
        let event = ac.add_publisher(&owner(), pub1.clone()).unwrap();
        assert_eq!(event, RegistryEvent::PublisherAdded { address: pub1.clone() });
        assert!(ac.authorize(&pub1));
    }

    #[test]
    fn test_removed_publisher_loses_rights() {
        let mut ac = make_policy();
        let pub1 = Address::new("publisher-1");
        ac.add_publisher(&owner(), pub1.clone()).unwrap();
        ac.remove_publisher(&owner(), pub1.clone()).unwrap();
        assert!(!ac.authorize(&pub1));
    }

    #[test]
    fn test_remove_absent_publisher_is_not_an_error() {
        let mut ac = make_policy();
        let event = ac.remove_publisher(&owner(), Address::new("never-added")).unwrap();
        assert_eq!(
            event,
            RegistryEvent::PublisherRemoved {
                address: Address::new("never-added")
            }
        );
    }

    #[test]
    fn test_publisher_cannot_manage_publishers() {
        let mut ac = make_policy();
        let pub1 = Address::new("publisher-1");
        ac.add_publisher(&owner(), pub1.clone()).unwrap();
        let result = ac.add_publisher(&pub1, Address::new("publisher-2"));
        assert_eq!(result.unwrap_err(), RegistryError::NotOwner { caller: pub1 });
    }

    #[test]
    fn test_null_publisher_rejected() {
        let mut ac = make_policy();
        let result = ac.add_publisher(&owner(), Address::new("0x0000"));
        assert_eq!(
            result.unwrap_err(),
            RegistryError::InvalidAddress { role: "publisher" }
        );
    }

    #[test]
    fn test_ownership_transfer() {
        let mut ac = make_policy();
        let new_owner = Address::new("issuer-next");
        let event = ac.transfer_ownership(&owner(), new_owner.clone()).unwrap();
        assert_eq!(
            event,
            RegistryEvent::OwnershipTransferred {
                old_owner: owner(),
                new_owner: new_owner.clone(),
            }
        );
        // Old owner is out, new owner is in.
        assert!(!ac.authorize(&owner()));
        assert!(ac.authorize(&new_owner));
        assert!(ac.transfer_ownership(&owner(), Address::new("x")).is_err());
    }

    #[test]
    fn test_null_new_owner_rejected() {
        let mut ac = make_policy();
        let result = ac.transfer_ownership(&owner(), Address::new("0x0"));
        assert_eq!(result.unwrap_err(), RegistryError::InvalidAddress { role: "owner" });
    }

    #[test]
    fn test_failed_transfer_leaves_owner_unchanged() {
        let mut ac = make_policy();
        let _ = ac.transfer_ownership(&Address::new("mallory"), Address::new("mallory"));
        assert_eq!(ac.owner(), &owner());
    }

    #[test]
    fn test_policy_serialization_round_trip() {
        let mut ac = make_policy();
        ac.add_publisher(&owner(), Address::new("publisher-1")).unwrap();
        let json = serde_json::to_string(&ac).unwrap();
        let parsed: AccessControl = serde_json::from_str(&json).unwrap();
        assert!(parsed.authorize(&Address::new("publisher-1")));
        assert_eq!(parsed.owner(), ac.owner());
    }
}
