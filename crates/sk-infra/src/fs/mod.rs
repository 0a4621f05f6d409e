mod identity_file_store;

pub use identity_file_store::FileIdentityStore;
