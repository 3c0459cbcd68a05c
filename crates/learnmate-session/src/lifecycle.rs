//! # Session Lifecycle
//!
//! Creates sessions from submitted input, persists practice progress,
//! deletes sessions and produces export files.
//!
//! Invalid input never raises an error: the submission comes back as
//! [`Submission::Rejected`] and nothing is stored, so the caller can let
//! the user correct the input and try again.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::content::ContentProvider;
use crate::error::StorageResult;
use crate::session_store::SessionStore;
use crate::types::{QuestionItem, Session, SessionPreview, SessionType, Summary};
use crate::upload::{VideoFile, ACCEPTED_VIDEO_TYPE};

/// Why a submission did not create a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Text was empty or whitespace only
    BlankText,
    /// No file selected
    NoFile,
    /// File media type is not the accepted video type
    UnsupportedMediaType(String),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::BlankText => write!(f, "study text is empty"),
            Rejection::NoFile => write!(f, "no video file selected"),
            Rejection::UnsupportedMediaType(t) => write!(f, "unsupported media type: {}", t),
        }
    }
}

/// Outcome of a create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Session),
    Rejected(Rejection),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Submission::Accepted(session) => Some(session),
            Submission::Rejected(_) => None,
        }
    }

    pub fn into_session(self) -> Option<Session> {
        match self {
            Submission::Accepted(session) => Some(session),
            Submission::Rejected(_) => None,
        }
    }
}

/// Downloadable export of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    date: &'a chrono::DateTime<Utc>,
    #[serde(rename = "type")]
    session_type: SessionType,
    content: &'a str,
    summary: &'a Summary,
    questions: &'a [QuestionItem],
}

/// Export file name for a session, from its creation date
pub fn export_file_name(session: &Session) -> String {
    format!("learnmate-session-{}.json", session.date.format("%Y-%m-%d"))
}

/// Serialize the shareable part of a session. Pure: touches no storage.
pub fn export(session: &Session) -> StorageResult<ExportBlob> {
    let document = ExportDocument {
        date: &session.date,
        session_type: session.session_type,
        content: &session.content,
        summary: &session.summary,
        questions: &session.questions,
    };
    Ok(ExportBlob {
        file_name: export_file_name(session),
        media_type: "application/json",
        bytes: serde_json::to_vec_pretty(&document)?,
    })
}

pub struct SessionLifecycle {
    store: Arc<SessionStore>,
    provider: Arc<dyn ContentProvider>,
    accepted_video_type: String,
}

impl SessionLifecycle {
    pub fn new(store: Arc<SessionStore>, provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            store,
            provider,
            accepted_video_type: ACCEPTED_VIDEO_TYPE.to_string(),
        }
    }

    pub fn with_accepted_video_type(mut self, media_type: impl Into<String>) -> Self {
        self.accepted_video_type = media_type.into();
        self
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Media type `create_from_video` accepts
    pub fn accepted_video_type(&self) -> &str {
        &self.accepted_video_type
    }

    pub fn provider(&self) -> Arc<dyn ContentProvider> {
        Arc::clone(&self.provider)
    }

    /// Create and store a text session. `raw` is stored as given, untrimmed.
    pub async fn create_from_text(&self, raw: &str) -> StorageResult<Submission> {
        if raw.trim().is_empty() {
            debug!("Rejected text submission: blank");
            return Ok(Submission::Rejected(Rejection::BlankText));
        }
        self.create(SessionType::Text, raw).await
    }

    /// Create and store a video session named after the selected file
    pub async fn create_from_video(&self, file: Option<&VideoFile>) -> StorageResult<Submission> {
        let file = match file {
            Some(file) => file,
            None => {
                debug!("Rejected video submission: no file");
                return Ok(Submission::Rejected(Rejection::NoFile));
            }
        };

        if !file.is_accepted(&self.accepted_video_type) {
            debug!("Rejected video submission: {} is {}", file.name, file.media_type);
            return Ok(Submission::Rejected(Rejection::UnsupportedMediaType(
                file.media_type.clone(),
            )));
        }

        if file.name.trim().is_empty() {
            return Ok(Submission::Rejected(Rejection::NoFile));
        }

        self.create(SessionType::Video, &file.name).await
    }

    async fn create(&self, session_type: SessionType, content: &str) -> StorageResult<Submission> {
        let generated = self.provider.produce(content);
        let session = Session::new(Utc::now(), session_type, content, generated);
        let session = self.store.append(session).await?;

        info!(
            "Created {} session {} with {} questions",
            session.session_type,
            session.id,
            session.questions.len()
        );
        Ok(Submission::Accepted(session))
    }

    /// Write answers recorded during practice back to the store.
    /// Returns `false` if the session was deleted in the meantime.
    pub async fn save_progress(&self, session: &Session) -> StorageResult<bool> {
        let saved = self.store.replace(session).await?;
        if saved {
            debug!(
                "Saved progress for session {} ({}/{} answered)",
                session.id,
                session.answered_count(),
                session.questions.len()
            );
        }
        Ok(saved)
    }

    /// Delete a session; absent ids are a successful no-op
    pub async fn delete(&self, id: i64) -> StorageResult<()> {
        if self.store.remove(id).await? {
            info!("Deleted session: {}", id);
        }
        Ok(())
    }

    pub async fn get(&self, id: i64) -> StorageResult<Option<Session>> {
        self.store.get(id).await
    }

    pub async fn list(&self) -> StorageResult<Vec<Session>> {
        self.store.load().await
    }

    /// History previews in store order
    pub async fn history(&self) -> StorageResult<Vec<SessionPreview>> {
        Ok(self.store.load().await?.iter().map(SessionPreview::from).collect())
    }

    pub fn export(&self, session: &Session) -> StorageResult<ExportBlob> {
        export(session)
    }
}
