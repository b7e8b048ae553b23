//! # Record Keys — Holder-Derived Digests
//!
//! Defines `RecordKey`, the fixed-width digest that addresses a holder's
//! record slot in the revocation store.
//!
//! ## Security Invariant
//!
//! A `RecordKey` is derived from the holder identifier alone — never from
//! the revocation epoch. Identical holder identifiers always derive
//! identical keys, so each holder owns exactly one mutable record slot;
//! re-publication updates that slot rather than creating a new one. This
//! is enforced by the constructor: [`RecordKey::derive()`] is the only
//! derivation path.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::identity::HolderId;

/// A 256-bit record key, deterministically derived from a holder
/// identifier via SHA-256.
///
/// Distinct identifiers derive distinct keys with overwhelming
/// probability; collisions would require breaking SHA-256.
///
/// Serializes as a 64-character lowercase hex string, so keys are usable
/// as JSON object keys and readable in subscriber-facing event payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey([u8; 32]);

impl RecordKey {
    /// Derive the record key for a holder.
    ///
    /// Hashes the raw UTF-8 bytes of the holder identifier. The epoch is
    /// deliberately excluded from the input so that a holder's record is
    /// a single mutable slot rather than one slot per epoch.
    pub fn derive(holder_id: &HolderId) -> Self {
        let hash = Sha256::digest(holder_id.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    /// The raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the key as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a key from its 64-character hex rendering.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 64 {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(hex.get(2 * i..2 * i + 2)?, 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "key:{}", self.to_hex())
    }
}

impl Serialize for RecordKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid record key hex: {hex:?}")))
    }
}
