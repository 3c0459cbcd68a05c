//! # Session Types
//!
//! The persisted study session record and the values derived from it.
//!
//! Field names follow the persisted JSON layout (`type`, `bulletPoints`),
//! so records written by earlier front ends load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of source material a session was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Text,
    Video,
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionType::Text => write!(f, "text"),
            SessionType::Video => write!(f, "video"),
        }
    }
}

impl SessionType {
    /// Heading used in history listings
    pub fn title(&self) -> &'static str {
        match self {
            SessionType::Text => "Text Session",
            SessionType::Video => "Video Session",
        }
    }
}

/// Summary attached at creation time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub paragraph: String,
}

impl Summary {
    pub fn new(bullet_points: Vec<String>, paragraph: impl Into<String>) -> Self {
        Self {
            bullet_points,
            paragraph: paragraph.into(),
        }
    }
}

/// One interview question with the user's answer and the feedback shown for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub feedback: String,
}

impl QuestionItem {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: String::new(),
            feedback: String::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

/// Summary and questions produced for a piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    pub summary: Summary,
    pub questions: Vec<QuestionItem>,
}

/// A complete study session record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Creation time in milliseconds, unique within a store
    pub id: i64,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Submitted text, or the uploaded file's name
    pub content: String,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub questions: Vec<QuestionItem>,
}

impl Session {
    /// Build a session stamped with `date`; the id is the millisecond timestamp.
    pub fn new(
        date: DateTime<Utc>,
        session_type: SessionType,
        content: impl Into<String>,
        generated: GeneratedContent,
    ) -> Self {
        Self {
            id: date.timestamp_millis(),
            date,
            session_type,
            content: content.into(),
            summary: generated.summary,
            questions: generated.questions,
        }
    }

    /// Number of questions that already carry an answer
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn is_fully_answered(&self) -> bool {
        !self.questions.is_empty() && self.answered_count() == self.questions.len()
    }

    pub fn preview(&self) -> SessionPreview {
        SessionPreview::from(self)
    }
}

/// Number of bullet points shown in a history preview
pub const PREVIEW_POINTS: usize = 3;

/// History list entry for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionPreview {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub session_type: SessionType,
    pub title: String,
    pub preview_points: Vec<String>,
    /// Bullet points beyond the preview
    pub remaining_points: usize,
    pub question_count: usize,
    pub answered_count: usize,
}

impl From<&Session> for SessionPreview {
    fn from(session: &Session) -> Self {
        let points = &session.summary.bullet_points;
        Self {
            id: session.id,
            date: session.date,
            session_type: session.session_type,
            title: session.session_type.title().to_string(),
            preview_points: points.iter().take(PREVIEW_POINTS).cloned().collect(),
            remaining_points: points.len().saturating_sub(PREVIEW_POINTS),
            question_count: session.questions.len(),
            answered_count: session.answered_count(),
        }
    }
}
