//! Content provider seam.
//!
//! The lifecycle controller asks a provider for the summary and questions of
//! submitted content, and the practice machine asks it for feedback on each
//! answer. [`PlaceholderContent`] serves fixed data until a real analysis
//! backend exists.

use crate::types::{GeneratedContent, QuestionItem, Summary};

pub trait ContentProvider: Send + Sync {
    /// Summary and questions for `content`
    fn produce(&self, content: &str) -> GeneratedContent;

    /// Feedback for `answer` to the question at `index`
    fn feedback(&self, index: usize, question: &str, answer: &str) -> String;
}

const PLACEHOLDER_BULLET_POINTS: [&str; 5] = [
    "React is a JavaScript library for building user interfaces",
    "Components are the building blocks of React applications",
    "State management allows components to be dynamic and interactive",
    "Hooks like useState and useEffect enable functional components to have state and side effects",
    "Virtual DOM improves performance by minimizing direct DOM manipulation",
];

const PLACEHOLDER_PARAGRAPH: &str = "React is a powerful JavaScript library developed by Facebook for creating interactive user interfaces. It follows a component-based architecture where each component manages its own state and can be reused throughout the application. The introduction of hooks has revolutionized React development by allowing functional components to handle state and lifecycle methods, making code more concise and easier to understand.";

const PLACEHOLDER_QUESTIONS: [(&str, &str); 3] = [
    (
        "What is React and what problem does it solve?",
        "Good start! You correctly identified React as a UI library. To improve, mention specific problems it solves like component reusability and efficient DOM updates through the Virtual DOM.",
    ),
    (
        "Explain the difference between state and props in React.",
        "Excellent explanation! You clearly distinguished between state (internal component data) and props (data passed from parent). Consider adding examples of when to use each.",
    ),
    (
        "How do React hooks improve functional components?",
        "Great answer! You covered the main benefits of hooks. You could also mention specific hooks like useEffect for side effects and useContext for consuming context.",
    ),
];

/// Number of questions the placeholder provider attaches
pub const PLACEHOLDER_QUESTION_COUNT: usize = PLACEHOLDER_QUESTIONS.len();

/// Fixed summary, questions and feedback, independent of the content
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderContent;

impl ContentProvider for PlaceholderContent {
    fn produce(&self, _content: &str) -> GeneratedContent {
        GeneratedContent {
            summary: Summary::new(
                PLACEHOLDER_BULLET_POINTS.iter().map(|p| p.to_string()).collect(),
                PLACEHOLDER_PARAGRAPH,
            ),
            questions: PLACEHOLDER_QUESTIONS
                .iter()
                .map(|(question, _)| QuestionItem::new(*question))
                .collect(),
        }
    }

    fn feedback(&self, index: usize, _question: &str, _answer: &str) -> String {
        PLACEHOLDER_QUESTIONS
            .get(index)
            .map(|(_, feedback)| feedback.to_string())
            .unwrap_or_else(|| "Thanks for your answer!".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_produces_fixed_set() {
        let generated = PlaceholderContent.produce("anything");
        assert_eq!(generated.summary.bullet_points.len(), 5);
        assert_eq!(generated.questions.len(), PLACEHOLDER_QUESTION_COUNT);
        assert!(generated.questions.iter().all(|q| q.answer.is_empty() && q.feedback.is_empty()));
        assert_eq!(generated, PlaceholderContent.produce("something else"));
    }

    #[test]
    fn test_placeholder_feedback_per_question() {
        let first = PlaceholderContent.feedback(0, "", "x");
        let third = PlaceholderContent.feedback(2, "", "x");
        assert!(first.starts_with("Good start!"));
        assert!(third.starts_with("Great answer!"));
        assert!(!PlaceholderContent.feedback(10, "", "x").is_empty());
    }
}
