//! # crr-core — Foundational Types for the Revocation Registry
//!
//! This crate is the bedrock of the credential revocation registry. It defines
//! the type-system primitives that the registry state machine builds on. The
//! `crr-registry` crate depends on `crr-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address`, `HolderId`,
//!    `RecordKey`, `EpochDays` — all newtypes. No bare strings or integers
//!    for identifiers at the registry boundary.
//!
//! 2. **Key derivation is a single construction path.** A `RecordKey` can only
//!    be produced by `RecordKey::derive()`, which hashes the UTF-8 bytes of the
//!    holder identifier. No code path can fabricate a key from unrelated bytes.
//!
//! 3. **Explicit caller identity.** Authorization never relies on ambient
//!    context — every mutating registry operation takes the caller `Address`
//!    as an explicit parameter.
//!
//! 4. **Structured errors.** One `RegistryError` variant per rejection kind,
//!    carrying the identities and state names involved.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `crr-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod epoch;
pub mod error;
pub mod event;
pub mod identity;
pub mod key;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use epoch::EpochDays;
pub use error::RegistryError;
pub use event::RegistryEvent;
pub use identity::{Address, HolderId};
pub use key::RecordKey;
pub use status::CredentialStatus;
