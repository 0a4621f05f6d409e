//! Port interfaces for the identity provider
//!
//! Ports define the contract between the resolution logic and
//! infrastructure implementations, keeping the core independent of how a
//! deployment actually persists the identifier.

pub mod identity_store;

pub use identity_store::{IdentityStoreError, IdentityStorePort};
