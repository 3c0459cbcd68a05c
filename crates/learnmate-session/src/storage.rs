//! # Storage Traits
//!
//! Key-value backend the session store writes through. A backend maps a
//! textual key to a textual value and replaces values whole.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::StorageResult;

/// Durable key → string storage
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Drop `key`; absent keys are not an error
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory backend, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let backend = Self::default();
        backend.entries.write().insert(key.into(), value.into());
        backend
    }
}

#[async_trait]
impl KeyValueBackend for MemoryBackend {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_set_get_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("k").await.unwrap(), None);

        backend.set("k", "one").await.unwrap();
        backend.set("k", "two").await.unwrap();
        assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("two"));

        backend.remove("k").await.unwrap();
        backend.remove("k").await.unwrap();
        assert_eq!(backend.get("k").await.unwrap(), None);
    }
}
