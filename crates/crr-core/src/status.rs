//! # Credential Status
//!
//! The two-state validity status of a holder's credential. The full
//! transition rules live in the registry crate; this is the shared
//! vocabulary between records, read views, and emitted events.

use serde::{Deserialize, Serialize};

/// The validity status of a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialStatus {
    /// Credential is valid. Also the read-contract default for holders
    /// that were never published.
    Active,
    /// Credential has been revoked.
    Revoked,
}

impl CredentialStatus {
    /// Whether the credential is currently revoked.
    pub fn is_revoked(&self) -> bool {
        matches!(self, Self::Revoked)
    }
}

impl std::fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Revoked => "REVOKED",
        };
        f.write_str(s)
    }
}
