//! Filesystem-backed identity store.
//!
//! Persists each key as a dotfile (`.{key}`) under a base directory. With
//! the default home-directory base and the fixed identity key this yields
//! `~/.silent-killer-device-id`, the location the desktop agent has always
//! used.

use anyhow::{Context, Result};
use std::path::PathBuf;

use sk_core::ports::{IdentityStoreError, IdentityStorePort};

pub struct FileIdentityStore {
    base_dir: PathBuf,
}

impl FileIdentityStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store rooted in the user's home directory.
    pub fn in_home_dir() -> Result<Self, IdentityStoreError> {
        let home = dirs::home_dir()
            .ok_or_else(|| IdentityStoreError::Unavailable("home directory not found".into()))?;
        Ok(Self::new(home))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!(".{key}"))
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("read identity file failed: {}", path.display()))?;

        let value = content.trim();
        if value.is_empty() {
            return Ok(None);
        }

        Ok(Some(value.to_string()))
    }

    fn write_key(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("create identity dir failed: {}", self.base_dir.display()))?;

        let path = self.key_path(key);

        // Try atomic write using temp file + rename first.
        // If rename fails (e.g., cross-device link in CI environments), fall
        // back to a direct write.
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, value)
            .with_context(|| format!("write temp identity file failed: {}", tmp_path.display()))?;

        match std::fs::rename(&tmp_path, &path) {
            Ok(_) => Ok(()),
            Err(rename_err) => {
                std::fs::write(&path, value).with_context(|| {
                    format!(
                        "direct write identity file failed after rename error ({}): {}",
                        rename_err,
                        path.display()
                    )
                })?;
                let _ = std::fs::remove_file(&tmp_path);
                Ok(())
            }
        }
    }
}

impl IdentityStorePort for FileIdentityStore {
    fn get(&self, key: &str) -> Result<Option<String>, IdentityStoreError> {
        self.read_key(key)
            .map_err(|e| IdentityStoreError::Store(format!("{e:#}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), IdentityStoreError> {
        self.write_key(key, value)
            .map_err(|e| IdentityStoreError::Store(format!("{e:#}")))
    }
}
