//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the two identifier namespaces of the registry.
//! These prevent accidental identifier confusion — you cannot pass a
//! caller `Address` where a `HolderId` is expected.
//!
//! ## Security Invariant
//!
//! Type-level distinction between identifier namespaces prevents
//! cross-namespace confusion where a caller address is hashed as if it
//! were a holder identifier (or vice versa).

use serde::{Deserialize, Serialize};

/// The identity of a caller as supplied by the external execution
/// environment (owner, publisher, or stranger).
///
/// The empty string and the all-zero hex address are treated as the null
/// address. Operations that require a real identity reject null addresses
/// with `RegistryError::InvalidAddress`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Wrap a caller identity string.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Whether this is the null/zero address.
    ///
    /// Null means either the empty string or a hex address whose digits
    /// are all zero (with or without a `0x` prefix).
    pub fn is_null(&self) -> bool {
        let digits = self.0.strip_prefix("0x").unwrap_or(&self.0);
        digits.is_empty() || digits.chars().all(|c| c == '0')
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "addr:{}", self.0)
    }
}

/// The stable string identifier of a credential holder.
///
/// The holder identifier is the sole input to record-key derivation: one
/// holder, one key, one record slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HolderId(String);

impl HolderId {
    /// Wrap a holder identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UTF-8 bytes used for record-key derivation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for HolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "holder:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address_is_null() {
        assert!(Address::new("").is_null());
    }

    #[test]
    fn test_zero_hex_address_is_null() {
        assert!(Address::new("0x0000000000000000000000000000000000000000").is_null());
        assert!(Address::new("0000").is_null());
        assert!(Address::new("0x").is_null());
    }

    #[test]
    fn test_real_address_is_not_null() {
        assert!(!Address::new("0x00a1").is_null());
        assert!(!Address::new("did:example:issuer-7").is_null());
    }

    #[test]
    fn test_address_display() {
        assert_eq!(Address::new("issuer-1").to_string(), "addr:issuer-1");
    }

    #[test]
    fn test_holder_display() {
        let h = HolderId::new("alice@example.com");
        assert_eq!(h.to_string(), "holder:alice@example.com");
        assert_eq!(h.as_str(), "alice@example.com");
    }

    #[test]
    fn test_holder_serialization_round_trip() {
        let h = HolderId::new("holder:alice@example.com");
        let json = serde_json::to_string(&h).unwrap();
        let parsed: HolderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, h);
    }
}
