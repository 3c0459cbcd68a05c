//! # Session Store
//!
//! Ordered list of [`Session`] records kept under one backend key.
//!
//! Every mutation reads the full list, changes it, and writes the full list
//! back. Mutations are serialized behind one mutex so two callers never
//! interleave a read-modify-write.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};
use crate::storage::KeyValueBackend;
use crate::types::Session;

/// Key the session list lives under
pub const DEFAULT_SESSIONS_KEY: &str = "learnmate_sessions";

/// Encode a session list
pub fn serialize(sessions: &[Session]) -> StorageResult<String> {
    Ok(serde_json::to_string(sessions)?)
}

/// Decode a session list; unknown fields are ignored
pub fn deserialize(raw: &str) -> StorageResult<Vec<Session>> {
    Ok(serde_json::from_str(raw)?)
}

pub struct SessionStore {
    backend: Arc<dyn KeyValueBackend>,
    key: String,
    write_lock: Mutex<()>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self::with_key(backend, DEFAULT_SESSIONS_KEY)
    }

    pub fn with_key(backend: Arc<dyn KeyValueBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load all sessions.
    ///
    /// Absent, empty or unparseable data yields an empty list. Backend I/O
    /// failures are still returned as errors.
    pub async fn load(&self) -> StorageResult<Vec<Session>> {
        let raw = match self.backend.get(&self.key).await? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match deserialize(&raw) {
            Ok(sessions) => Ok(sessions),
            Err(e) => {
                warn!("Discarding unreadable session data under {}: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Find one session by id
    pub async fn get(&self, id: i64) -> StorageResult<Option<Session>> {
        Ok(self.load().await?.into_iter().find(|s| s.id == id))
    }

    /// Append a session at the end of the list.
    ///
    /// If the session's id collides with or precedes a stored id it is
    /// moved past the largest one. Fails without writing when the largest
    /// stored id is `i64::MAX`. Returns the session as stored.
    pub async fn append(&self, mut session: Session) -> StorageResult<Session> {
        let _guard = self.write_lock.lock().await;
        let mut sessions = self.load().await?;

        if let Some(max_id) = sessions.iter().map(|s| s.id).max() {
            if session.id <= max_id {
                let next_id = max_id.checked_add(1).ok_or_else(|| {
                    StorageError::other(format!("No session id left after {}", max_id))
                })?;
                debug!("Session id {} taken, using {}", session.id, next_id);
                session.id = next_id;
            }
        }

        sessions.push(session.clone());
        self.write(&sessions).await?;
        debug!("Appended session {} ({} stored)", session.id, sessions.len());
        Ok(session)
    }

    /// Remove the session with `id`. Returns whether anything was removed.
    pub async fn remove(&self, id: i64) -> StorageResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut sessions = self.load().await?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);

        if sessions.len() == before {
            debug!("Session {} not stored, nothing to remove", id);
            return Ok(false);
        }

        self.write(&sessions).await?;
        debug!("Removed session {} ({} stored)", id, sessions.len());
        Ok(true)
    }

    /// Overwrite the stored record with the same id, keeping its position.
    /// Returns `false` without writing when the id is not stored.
    pub async fn replace(&self, session: &Session) -> StorageResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut sessions = self.load().await?;

        let Some(slot) = sessions.iter_mut().find(|s| s.id == session.id) else {
            return Ok(false);
        };
        *slot = session.clone();

        self.write(&sessions).await?;
        debug!("Replaced session {}", session.id);
        Ok(true)
    }

    async fn write(&self, sessions: &[Session]) -> StorageResult<()> {
        let raw = serialize(sessions)?;
        self.backend.set(&self.key, &raw).await
    }
}
