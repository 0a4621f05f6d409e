//! Consumer-facing identity state.
//!
//! The identifier is not available synchronously at construction; consumers
//! see an explicit `Unresolved` state until the resolution procedure has run
//! once, then `Resolved` forever after. The transition happens at most once
//! per cell.

use tokio::sync::watch;

use crate::ids::DeviceId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdentityState {
    #[default]
    Unresolved,
    Resolved(DeviceId),
}

impl IdentityState {
    pub fn is_resolved(&self) -> bool {
        matches!(self, IdentityState::Resolved(_))
    }

    pub fn device_id(&self) -> Option<&DeviceId> {
        match self {
            IdentityState::Resolved(id) => Some(id),
            IdentityState::Unresolved => None,
        }
    }
}

/// Publisher half: owned by whoever runs the resolution procedure.
pub struct IdentityCell {
    tx: watch::Sender<IdentityState>,
}

impl IdentityCell {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(IdentityState::Unresolved);
        Self { tx }
    }

    /// Subscribe a consumer to the state.
    pub fn watch(&self) -> IdentityWatch {
        IdentityWatch {
            rx: self.tx.subscribe(),
        }
    }

    /// Transition to `Resolved`. The first call wins; returns whether this
    /// call performed the transition.
    pub fn resolve(&self, id: DeviceId) -> bool {
        self.tx.send_if_modified(|state| {
            if state.is_resolved() {
                return false;
            }
            *state = IdentityState::Resolved(id);
            true
        })
    }
}

impl Default for IdentityCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer half: poll `current` or await `resolved`.
#[derive(Clone)]
pub struct IdentityWatch {
    rx: watch::Receiver<IdentityState>,
}

impl IdentityWatch {
    pub fn current(&self) -> IdentityState {
        self.rx.borrow().clone()
    }

    pub fn device_id(&self) -> Option<DeviceId> {
        self.rx.borrow().device_id().cloned()
    }

    /// Wait until the identity is resolved. Returns `None` only if the
    /// publisher went away without ever resolving.
    pub async fn resolved(&mut self) -> Option<DeviceId> {
        let state = self.rx.wait_for(|s| s.is_resolved()).await.ok()?;
        state.device_id().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unresolved() {
        let cell = IdentityCell::new();
        let watch = cell.watch();
        assert_eq!(watch.current(), IdentityState::Unresolved);
        assert!(watch.device_id().is_none());
    }

    #[test]
    fn resolve_transitions_once() {
        let cell = IdentityCell::new();
        let watch = cell.watch();

        let first = DeviceId::generate();
        let second = DeviceId::generate();

        assert!(cell.resolve(first.clone()), "first resolve should win");
        assert!(!cell.resolve(second), "second resolve should be a no-op");
        assert_eq!(watch.current(), IdentityState::Resolved(first));
    }

    #[tokio::test]
    async fn resolved_waits_for_transition() {
        let cell = IdentityCell::new();
        let mut watch = cell.watch();

        let id = DeviceId::generate();
        let expected = id.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            cell.resolve(id);
        });

        let resolved = watch.resolved().await;
        assert_eq!(resolved, Some(expected));
    }

    #[tokio::test]
    async fn resolved_returns_none_when_publisher_dropped() {
        let cell = IdentityCell::new();
        let mut watch = cell.watch();
        drop(cell);

        assert_eq!(watch.resolved().await, None);
    }
}
