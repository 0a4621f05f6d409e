//! Background identity resolution.
//!
//! Resolution runs once, off the caller's task, and publishes the result
//! through an [`IdentityWatch`]. Consumers observe `Unresolved` until the
//! store round trip completes.

use std::sync::Arc;

use sk_core::ports::IdentityStorePort;
use sk_core::{DeviceIdentityProvider, IdentityCell, IdentityWatch};

/// Start resolving the device identity against `store`.
///
/// Must be called within a tokio runtime; the store round trip runs on a
/// blocking task. The returned watch transitions to `Resolved` exactly once.
pub fn start_device_identity(store: Arc<dyn IdentityStorePort>) -> IdentityWatch {
    let cell = IdentityCell::new();
    let watch = cell.watch();

    tokio::task::spawn_blocking(move || {
        let provider = DeviceIdentityProvider::new(store);
        let resolved = provider.resolve();
        tracing::debug!(source = ?resolved.source, "device identity resolved");
        cell.resolve(resolved.device_id);
    });

    watch
}
