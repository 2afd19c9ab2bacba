//! Persistence of the logged-in user record.
//!
//! The record is a small JSON file. Reads and writes go through `tokio::fs`
//! so the gate can await them the same way it awaits the network.

use crate::api::User;
use crate::error::StorageError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store for the single [`User`] record.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (`user.json` in the config directory).
    pub fn default_location() -> Self {
        Self::new(crate::utils::get_user_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored user. A missing file is `Ok(None)`.
    pub async fn load(&self) -> Result<Option<User>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored user at {:?}", self.path);
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let user = serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(user))
    }

    /// Write the user record, owner-readable only on Unix.
    pub async fn save(&self, user: &User) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        let content = serde_json::to_string_pretty(user).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }
        tokio::fs::write(&self.path, content).await.map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            tokio::fs::set_permissions(&self.path, perms)
                .await
                .map_err(write_err)?;
        }

        debug!("Stored user {} at {:?}", user.username, self.path);
        Ok(())
    }

    /// Remove the stored record. Removing a record that is not there succeeds.
    pub async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
