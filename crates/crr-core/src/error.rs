//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error taxonomy of the revocation registry. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - One variant per rejection kind; a failed call maps to exactly one.
//! - Variants carry the identities and state names involved, so callers
//!   can log or surface failures without re-querying the registry.
//! - Every error is raised synchronously at the call boundary, before
//!   any state mutation. A failed call leaves the registry bit-for-bit
//!   identical to before the call.

use thiserror::Error;

use crate::identity::Address;
use crate::key::RecordKey;

/// Rejection kinds for registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not the current owner, for owner-only operations.
    #[error("caller {caller} is not the registry owner")]
    NotOwner {
        /// The rejected caller.
        caller: Address,
    },

    /// Caller is neither owner nor an active publisher, for
    /// publish/un-revoke.
    #[error("caller {caller} is not authorized to publish or un-revoke")]
    NotAuthorized {
        /// The rejected caller.
        caller: Address,
    },

    /// A supplied address is null/zero where a real identity is required.
    #[error("null address supplied for {role}")]
    InvalidAddress {
        /// The role the address was supplied for ("owner", "publisher").
        role: &'static str,
    },

    /// Publish attempted against a record already in REVOKED status.
    #[error("record {key} is already published as revoked")]
    AlreadyPublished {
        /// The record key the publish targeted.
        key: RecordKey,
    },

    /// Un-revoke attempted against a record that is absent or already
    /// ACTIVE.
    #[error("record {key} is not revoked ({state})")]
    NotRevoked {
        /// The record key the un-revoke targeted.
        key: RecordKey,
        /// The record's observed state ("absent" or "ACTIVE").
        state: &'static str,
    },

    /// Batch input arrays of unequal length.
    #[error("batch length mismatch: {holders} holders, {epochs} epochs, {pointers} pointers")]
    LengthMismatch {
        /// Number of holder identifiers supplied.
        holders: usize,
        /// Number of epoch values supplied.
        epochs: usize,
        /// Number of evidence pointers supplied.
        pointers: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::HolderId;

    #[test]
    fn test_not_owner_display() {
        let err = RegistryError::NotOwner {
            caller: Address::new("mallory"),
        };
        assert_eq!(err.to_string(), "caller addr:mallory is not the registry owner");
    }

    #[test]
    fn test_not_revoked_display() {
        let key = RecordKey::derive(&HolderId::new("holder:alice@example.com"));
        let err = RegistryError::NotRevoked { key, state: "absent" };
        assert!(err.to_string().contains("is not revoked (absent)"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = RegistryError::LengthMismatch {
            holders: 3,
            epochs: 2,
            pointers: 3,
        };
        assert_eq!(
            err.to_string(),
            "batch length mismatch: 3 holders, 2 epochs, 3 pointers"
        );
    }
}
