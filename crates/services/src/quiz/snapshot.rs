use elara_core::model::{CompletionSummary, QuestionRecord, QuizSession};

use super::progress::QuizProgress;
use crate::feedback::Feedback;

/// The open question as the UI shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position in the subject.
    pub number: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

impl QuestionView {
    fn from_record(index: usize, record: &QuestionRecord) -> Self {
        Self {
            number: index + 1,
            prompt: record.prompt().to_string(),
            options: record.options().to_vec(),
        }
    }
}

/// Read-only state of a quiz after a transition.
///
/// Presentation-agnostic: the UI decides how to format percentages and
/// which decorations go with each feedback tone.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSnapshot {
    pub subject: String,
    pub question: Option<QuestionView>,
    pub progress: QuizProgress,
    pub score: usize,
    pub answered: bool,
    pub feedback: Feedback,
    pub summary: Option<CompletionSummary>,
}

impl QuizSnapshot {
    #[must_use]
    pub fn from_session(session: &QuizSession, feedback: &Feedback) -> Self {
        let total = session.total();
        let current = session.current_index();
        Self {
            subject: session.subject().to_string(),
            question: session
                .current_question()
                .map(|record| QuestionView::from_record(current, record)),
            progress: QuizProgress {
                total,
                current,
                is_complete: session.is_complete(),
            },
            score: session.score(),
            answered: session.is_answered(),
            feedback: feedback.clone(),
            summary: session.summary(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.is_complete
    }
}
