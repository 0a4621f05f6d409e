//! Device identity resolution.
//!
//! Read-before-write against an injected store: an existing value is always
//! returned unchanged, a missing value is generated and persisted exactly
//! once. Store failures degrade to a process-lifetime ephemeral identity
//! rather than failing the hosting application.

use std::sync::{Arc, Mutex};

use crate::ids::DeviceId;
use crate::ports::identity_store::IdentityStorePort;

/// Fixed store key under which the identity is persisted.
pub const DEVICE_ID_KEY: &str = "silent-killer-device-id";

/// Where the resolved identity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// Read back from the persistent store.
    Loaded,
    /// Freshly generated and persisted.
    Generated,
    /// Freshly generated but not persisted; valid for this process only.
    Ephemeral,
}

#[derive(Debug, Clone)]
pub struct ResolvedIdentity {
    pub device_id: DeviceId,
    pub source: IdentitySource,
}

/// Resolves the device identity against an injected store.
///
/// The provider memoizes its result, so it acts as the single designated
/// initializer within a process: concurrent callers serialize on the memo
/// lock and at most one store write happens over the provider's lifetime.
pub struct DeviceIdentityProvider {
    store: Arc<dyn IdentityStorePort>,
    resolved: Mutex<Option<ResolvedIdentity>>,
}

impl DeviceIdentityProvider {
    pub fn new(store: Arc<dyn IdentityStorePort>) -> Self {
        Self {
            store,
            resolved: Mutex::new(None),
        }
    }

    /// Resolve the device identity, hitting the store only on the first call.
    pub fn resolve(&self) -> ResolvedIdentity {
        let mut guard = self.resolved.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(resolved) = guard.as_ref() {
            return resolved.clone();
        }

        let resolved = self.resolve_from_store();
        *guard = Some(resolved.clone());
        resolved
    }

    /// Convenience accessor when the caller only wants the identifier.
    pub fn device_id(&self) -> DeviceId {
        self.resolve().device_id
    }

    fn resolve_from_store(&self) -> ResolvedIdentity {
        match self.store.get(DEVICE_ID_KEY) {
            Ok(Some(value)) => {
                tracing::info!(device_id = %value, "found existing device identity");
                ResolvedIdentity {
                    device_id: DeviceId::new(value),
                    source: IdentitySource::Loaded,
                }
            }
            Ok(None) => {
                let id = DeviceId::generate();
                match self.store.set(DEVICE_ID_KEY, id.as_str()) {
                    Ok(()) => {
                        tracing::info!(device_id = %id, "generated new device identity");
                        ResolvedIdentity {
                            device_id: id,
                            source: IdentitySource::Generated,
                        }
                    }
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "persisting device identity failed, using ephemeral identity"
                        );
                        ResolvedIdentity {
                            device_id: id,
                            source: IdentitySource::Ephemeral,
                        }
                    }
                }
            }
            Err(e) => {
                // A blind write after a failed read could clobber an existing
                // value, so the ephemeral path performs no write at all.
                let id = DeviceId::generate();
                tracing::warn!(
                    error = %e,
                    "identity store unreadable, using ephemeral identity"
                );
                ResolvedIdentity {
                    device_id: id,
                    source: IdentitySource::Ephemeral,
                }
            }
        }
    }
}
