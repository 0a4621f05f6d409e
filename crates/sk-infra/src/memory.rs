//! In-memory identity store.
//!
//! Process-lifetime only. Used by tests and by environments where no
//! persistent storage is usable.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use sk_core::ports::{IdentityStoreError, IdentityStorePort};

#[derive(Default)]
pub struct MemoryIdentityStore {
    data: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls observed so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl IdentityStorePort for MemoryIdentityStore {
    fn get(&self, key: &str) -> Result<Option<String>, IdentityStoreError> {
        let data = self.data.lock().unwrap_or_else(|e| e.into_inner());
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), IdentityStoreError> {
        let mut data = self.data.lock().unwrap_or_else(|e| e.into_inner());
        data.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
