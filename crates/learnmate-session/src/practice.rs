//! # Interview Practice
//!
//! Drives the question → answer → feedback loop over a session's fixed
//! question list.
//!
//! ```text
//! Asking(i) --submit (non-blank)--> ShowingFeedback(i)
//! ShowingFeedback(i) --advance--> Asking(i + 1)      if i + 1 < n
//! ShowingFeedback(n - 1) --advance--> Complete       (signal, once)
//! ```
//!
//! The machine only moves forward. Once feedback is shown for a question
//! its answer can no longer be replaced. [`PracticeMachine::resume`] picks a
//! stored session up at its first unanswered question.

use std::sync::Arc;

use tracing::debug;

use crate::content::ContentProvider;
use crate::error::{PracticeError, PracticeResult};
use crate::types::{QuestionItem, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeState {
    Asking(usize),
    ShowingFeedback(usize),
}

impl PracticeState {
    pub fn index(&self) -> usize {
        match self {
            PracticeState::Asking(i) | PracticeState::ShowingFeedback(i) => *i,
        }
    }
}

/// Result of feeding one event to the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Guard failed or the event does not apply in the current state
    Rejected,
    /// Answer recorded, feedback attached
    FeedbackShown { index: usize, feedback: String },
    /// Moved on to the question at this index
    NextQuestion(usize),
    /// Last question done
    Complete,
    /// Caller should show the summary; state and answers are kept
    ReturnedToSummary,
}

pub struct PracticeMachine {
    session: Session,
    provider: Arc<dyn ContentProvider>,
    state: PracticeState,
    pending_answer: String,
    completed: bool,
}

impl std::fmt::Debug for PracticeMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticeMachine")
            .field("session_id", &self.session.id)
            .field("state", &self.state)
            .field("pending_answer", &self.pending_answer)
            .field("completed", &self.completed)
            .finish()
    }
}

impl PracticeMachine {
    /// Start at `Asking(0)`
    pub fn new(session: Session, provider: Arc<dyn ContentProvider>) -> PracticeResult<Self> {
        if session.questions.is_empty() {
            return Err(PracticeError::NoQuestions { id: session.id });
        }
        Ok(Self {
            session,
            provider,
            state: PracticeState::Asking(0),
            pending_answer: String::new(),
            completed: false,
        })
    }

    /// Pick up a stored session at its first unanswered question.
    /// A fully answered session starts over at `Asking(0)`.
    pub fn resume(session: Session, provider: Arc<dyn ContentProvider>) -> PracticeResult<Self> {
        let start = session
            .questions
            .iter()
            .position(|q| !q.is_answered())
            .unwrap_or(0);
        let mut machine = Self::new(session, provider)?;
        machine.state = PracticeState::Asking(start);
        Ok(machine)
    }

    pub fn state(&self) -> PracticeState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn question_count(&self) -> usize {
        self.session.questions.len()
    }

    pub fn current_question(&self) -> &QuestionItem {
        &self.session.questions[self.state.index()]
    }

    /// Text currently typed into the answer field
    pub fn pending_answer(&self) -> &str {
        &self.pending_answer
    }

    /// Replace the answer field; only editable while asking
    pub fn edit_answer(&mut self, text: impl Into<String>) -> bool {
        if self.completed || !matches!(self.state, PracticeState::Asking(_)) {
            return false;
        }
        self.pending_answer = text.into();
        true
    }

    /// Submit whatever is in the answer field
    pub fn submit_pending(&mut self) -> Transition {
        let text = self.pending_answer.clone();
        self.submit_answer(&text)
    }

    /// Record `text` as the answer to the current question
    pub fn submit_answer(&mut self, text: &str) -> Transition {
        let index = match self.state {
            PracticeState::Asking(i) if !self.completed => i,
            _ => return Transition::Rejected,
        };
        if text.trim().is_empty() {
            return Transition::Rejected;
        }

        let question = &mut self.session.questions[index];
        let feedback = self.provider.feedback(index, &question.question, text);
        question.answer = text.to_string();
        question.feedback = feedback.clone();

        self.pending_answer = text.to_string();
        self.state = PracticeState::ShowingFeedback(index);
        debug!("Session {}: answered question {}", self.session.id, index + 1);
        Transition::FeedbackShown { index, feedback }
    }

    /// Move past the feedback for the current question
    pub fn advance(&mut self) -> Transition {
        let index = match self.state {
            PracticeState::ShowingFeedback(i) if !self.completed => i,
            _ => return Transition::Rejected,
        };

        if index + 1 < self.session.questions.len() {
            self.state = PracticeState::Asking(index + 1);
            self.pending_answer.clear();
            Transition::NextQuestion(index + 1)
        } else {
            self.completed = true;
            self.pending_answer.clear();
            debug!("Session {}: practice complete", self.session.id);
            Transition::Complete
        }
    }

    /// Leave practice for the summary without dropping progress
    pub fn back(&self) -> Transition {
        Transition::ReturnedToSummary
    }
}
