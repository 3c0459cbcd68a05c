//! # FileBackend Implementation
//!
//! File based key-value backend.
//!
//! Layout:
//! ```text
//! <base_path>/
//! ├── learnmate_sessions.json    # one file per key
//! └── ...
//! ```
//!
//! Values are written to a sibling temp file and renamed into place, so a
//! reader sees either the previous value or the new one.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};
use crate::storage::KeyValueBackend;

/// FileBackend configuration
#[derive(Debug, Clone)]
pub struct FileBackendConfig {
    /// Root directory, `~` is expanded
    pub base_path: PathBuf,
}

impl FileBackendConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self::new(crate::default_storage_path())
    }
}

pub struct FileBackend {
    base_path: PathBuf,
}

impl FileBackend {
    /// Create the backend and its root directory
    pub async fn new(config: FileBackendConfig) -> StorageResult<Self> {
        let base_path_str = config.base_path.to_string_lossy().to_string();
        let base_path = shellexpand::tilde(&base_path_str);
        let base_path = PathBuf::from(base_path.as_ref());

        fs::create_dir_all(&base_path).await?;

        info!("FileBackend initialized at {:?}", base_path);
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// File holding the value for `key`
    pub fn key_file_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::config(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueBackend for FileBackend {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_file_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.key_file_path(key)?;
        let tmp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, &path).await?;
        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.key_file_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_backend_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(FileBackendConfig::new(temp_dir.path()))
            .await
            .unwrap();

        assert_eq!(backend.get("learnmate_sessions").await.unwrap(), None);

        backend.set("learnmate_sessions", "[]").await.unwrap();
        assert_eq!(
            backend.get("learnmate_sessions").await.unwrap().as_deref(),
            Some("[]")
        );
        assert!(temp_dir.path().join("learnmate_sessions.json").exists());
        assert!(!temp_dir.path().join("learnmate_sessions.json.tmp").exists());

        backend.remove("learnmate_sessions").await.unwrap();
        assert_eq!(backend.get("learnmate_sessions").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_backend_creates_nested_root() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let backend = FileBackend::new(FileBackendConfig::new(&nested)).await.unwrap();
        backend.set("k", "v").await.unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[tokio::test]
    async fn test_file_backend_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(FileBackendConfig::new(temp_dir.path()))
            .await
            .unwrap();

        assert!(matches!(
            backend.set("../escape", "x").await,
            Err(StorageError::ConfigError { .. })
        ));
        assert!(backend.get("").await.is_err());
    }
}
