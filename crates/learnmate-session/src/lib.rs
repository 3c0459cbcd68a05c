//! # LearnMate Session
//!
//! Study session records, their local persistence and the interview
//! practice loop.
//!
//! ## Features
//!
//! - **Session store**: ordered session list under one key of a key-value
//!   backend (file or memory); corrupt data loads as an empty list
//! - **Lifecycle**: create from text or an uploaded video, delete, export,
//!   save practice progress
//! - **Practice machine**: forward-only ask → answer → feedback loop
//! - **Content provider**: injectable source of summary, questions and
//!   feedback; ships with fixed placeholder content
//!
//! ## Storage layout
//!
//! ```text
//! <base_path>/
//! └── learnmate_sessions.json    # JSON array of sessions
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use learnmate_session::{
//!     FileBackend, FileBackendConfig, PlaceholderContent, PracticeMachine,
//!     SessionLifecycle, SessionStore, Submission,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = FileBackend::new(FileBackendConfig::new("~/.learnmate/data")).await?;
//!     let store = Arc::new(SessionStore::new(Arc::new(backend)));
//!     let lifecycle = SessionLifecycle::new(store, Arc::new(PlaceholderContent));
//!
//!     if let Submission::Accepted(session) = lifecycle.create_from_text("my notes").await? {
//!         let mut practice = PracticeMachine::new(session, lifecycle.provider())?;
//!         practice.submit_answer("React renders UI");
//!         practice.advance();
//!         lifecycle.save_progress(practice.session()).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod content;
pub mod error;
pub mod file_backend;
pub mod lifecycle;
pub mod practice;
pub mod session_store;
pub mod storage;
pub mod types;
pub mod upload;

pub use content::{ContentProvider, PlaceholderContent, PLACEHOLDER_QUESTION_COUNT};
pub use error::{PracticeError, PracticeResult, StorageError, StorageResult};
pub use file_backend::{FileBackend, FileBackendConfig};
pub use lifecycle::{export, export_file_name, ExportBlob, Rejection, SessionLifecycle, Submission};
pub use practice::{PracticeMachine, PracticeState, Transition};
pub use session_store::{deserialize, serialize, SessionStore, DEFAULT_SESSIONS_KEY};
pub use storage::{KeyValueBackend, MemoryBackend};
pub use types::{GeneratedContent, QuestionItem, Session, SessionPreview, SessionType, Summary};
pub use upload::{UploadSlot, VideoFile, ACCEPTED_VIDEO_TYPE};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default data directory
pub fn default_storage_path() -> std::path::PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".learnmate").join("data"))
        .unwrap_or_else(|| std::path::PathBuf::from("./learnmate_data"))
}
