use std::sync::Arc;

use sk_core::ports::IdentityStorePort;
use sk_core::{DeviceIdentityProvider, IdentitySource, IdentityState, DEVICE_ID_KEY};
use sk_infra::bootstrap::start_device_identity;
use sk_infra::{FileIdentityStore, MemoryIdentityStore};
use tempfile::TempDir;

#[test]
fn first_use_generates_and_persists() {
    let dir = TempDir::new().expect("create temp dir");
    let store = Arc::new(FileIdentityStore::new(dir.path()));

    let provider = DeviceIdentityProvider::new(store.clone());
    let resolved = provider.resolve();

    assert_eq!(resolved.source, IdentitySource::Generated);
    assert!(
        resolved.device_id.is_valid(),
        "generated identity should be canonical: {}",
        resolved.device_id
    );

    let stored = store
        .get(DEVICE_ID_KEY)
        .expect("get should succeed")
        .expect("store should contain the identity");
    assert_eq!(stored, resolved.device_id.as_str());

    assert!(
        dir.path().join(".silent-killer-device-id").exists(),
        "identity should live in the agent's dotfile"
    );
}

#[test]
fn identity_is_stable_across_providers() {
    let dir = TempDir::new().expect("create temp dir");

    let first = DeviceIdentityProvider::new(Arc::new(FileIdentityStore::new(dir.path())))
        .resolve();
    let second = DeviceIdentityProvider::new(Arc::new(FileIdentityStore::new(dir.path())))
        .resolve();

    assert_eq!(first.device_id, second.device_id);
    assert_eq!(first.source, IdentitySource::Generated);
    assert_eq!(second.source, IdentitySource::Loaded);
}

#[test]
fn prepopulated_store_is_returned_unchanged_without_write() {
    let store = Arc::new(MemoryIdentityStore::new());
    store
        .set(DEVICE_ID_KEY, "device-11111111-1111-4111-8111-111111111111")
        .expect("seed store");

    let resolved = DeviceIdentityProvider::new(store.clone()).resolve();

    assert_eq!(
        resolved.device_id.as_str(),
        "device-11111111-1111-4111-8111-111111111111"
    );
    assert_eq!(resolved.source, IdentitySource::Loaded);
    assert_eq!(store.write_count(), 1, "only the seeding write should exist");
}

#[test]
fn sequential_resolves_write_exactly_once() {
    let store = Arc::new(MemoryIdentityStore::new());
    let provider = DeviceIdentityProvider::new(store.clone());

    let first = provider.resolve();
    let second = provider.resolve();

    assert_eq!(first.device_id, second.device_id);
    assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn watch_transitions_from_unresolved_to_resolved() {
    let dir = TempDir::new().expect("create temp dir");
    let store = Arc::new(FileIdentityStore::new(dir.path()));

    let mut watch = start_device_identity(store.clone());
    let id = watch.resolved().await.expect("identity should resolve");

    assert!(id.is_valid());
    assert_eq!(watch.current(), IdentityState::Resolved(id.clone()));

    let stored = store
        .get(DEVICE_ID_KEY)
        .expect("get should succeed")
        .expect("store should contain the identity");
    assert_eq!(stored, id.as_str());
}
