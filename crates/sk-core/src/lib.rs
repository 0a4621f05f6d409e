//! # sk-core
//!
//! Core domain model and business logic for the SILENT KILLER device
//! identity provider.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the `DeviceId` value object, the storage port the provider reads and
//! writes through, and the resolution procedure itself.

// Public module exports
pub mod identity;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use identity::provider::{
    DeviceIdentityProvider, IdentitySource, ResolvedIdentity, DEVICE_ID_KEY,
};
pub use identity::state::{IdentityCell, IdentityState, IdentityWatch};
pub use ids::DeviceId;
