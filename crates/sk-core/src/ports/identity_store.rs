use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityStoreError {
    /// The store cannot be used at all in this environment
    /// (e.g. no home directory, storage disabled).
    #[error("identity store unavailable: {0}")]
    Unavailable(String),

    /// A read or write against an otherwise usable store failed.
    #[error("identity store failed: {0}")]
    Store(String),
}

/// Persistent key-value store for the device identity.
///
/// Synchronous and single-writer from the perspective of one running
/// instance. Values survive across process restarts until the store is
/// cleared externally.
pub trait IdentityStorePort: Send + Sync {
    /// Read the value stored at `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, IdentityStoreError>;

    /// Store `value` at `key`. Must be idempotent (overwrite if exists).
    fn set(&self, key: &str, value: &str) -> Result<(), IdentityStoreError>;
}

#[cfg(test)]
mockall::mock! {
    pub IdentityStore {}

    impl IdentityStorePort for IdentityStore {
        fn get(&self, key: &str) -> Result<Option<String>, IdentityStoreError>;
        fn set(&self, key: &str, value: &str) -> Result<(), IdentityStoreError>;
    }
}
