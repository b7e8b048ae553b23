//! # crr-registry — The Revocation Registry State Machine
//!
//! Implements the credential revocation registry on top of the `crr-core`
//! primitives:
//!
//! - **Access control** (`access.rs`): a single owner plus a set of
//!   delegated publishers. The owner manages the publisher set and may
//!   transfer ownership; owner and publishers may publish and un-revoke.
//!
//! - **Store** (`store.rs`): one record per holder-derived key with
//!   status, revocation epoch, evidence pointer, and a version counter
//!   that starts at 1 on first publish and increments by exactly 1 per
//!   successful transition.
//!
//! - **Registry facade** (`registry.rs`): the boundary the execution
//!   environment calls. Routes every mutation through authorization,
//!   queues one event per successful mutation for subscribers, and
//!   serves authorization-free reads.
//!
//! ## Execution Model
//!
//! The registry assumes an external environment that applies mutating
//! calls atomically in a single total order and supplies the caller
//! identity for each call. A failed call leaves all state bit-for-bit
//! unchanged; there are no partial mutations, retries, or timeouts
//! inside the registry.
//!
//! ## Crate Policy
//!
//! - Depends on `crr-core` internally.
//! - No `unsafe` code, no spawned threads, no blocking I/O.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod access;
pub mod registry;
pub mod store;

pub use access::AccessControl;
pub use registry::RevocationRegistry;
pub use store::{RevocationInfo, RevocationRecord, RevocationStore};
