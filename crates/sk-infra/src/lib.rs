//! # sk-infra
//!
//! Infrastructure adapters for the SILENT KILLER device identity provider:
//! filesystem and in-memory implementations of the identity store port, and
//! the bootstrap wiring that resolves the identity in the background.

pub mod bootstrap;
pub mod fs;
pub mod memory;

pub use fs::FileIdentityStore;
pub use memory::MemoryIdentityStore;
