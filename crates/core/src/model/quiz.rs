use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::catalog::QuizCatalog;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must have at least one option")]
    NoOptions,

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
}

//
// ─── QUESTION RECORD ───────────────────────────────────────────────────────────
//

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl QuestionRecord {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, there are
    /// no options, or `correct_index` does not point at an option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_index,
        })
    }

    /// Builds a question from built-in content that is checked by tests.
    pub(crate) fn from_static(prompt: &str, options: &[&str], correct_index: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            correct_index,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Active,
    Completed,
}

/// Result of selecting an option on the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_answer: String },
    /// The question was already answered, the quiz is over, or the option does
    /// not exist. Nothing changed.
    Ignored,
}

/// Result of asking for the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced,
    Completed,
    /// The current question has not been answered yet.
    Ignored,
}

/// Qualitative band for a finished quiz. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Excellent,
    Good,
    NeedsReview,
}

impl PerformanceTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            PerformanceTier::Excellent
        } else if percentage >= 60.0 {
            PerformanceTier::Good
        } else {
            PerformanceTier::NeedsReview
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent performance! You've mastered this subject!",
            PerformanceTier::Good => "Good job! Keep practicing to improve further.",
            PerformanceTier::NeedsReview => "Keep learning! Review the topics and try again.",
        }
    }
}

/// Score report for a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub tier: PerformanceTier,
}

impl CompletionSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64 * 100.0
        };
        Self {
            score,
            total,
            percentage,
            tier: PerformanceTier::from_percentage(percentage),
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One learner's walk through a subject's questions.
///
/// The session shares the subject's question list with the catalog and steps
/// through it linearly: select an option, then advance.
#[derive(Clone)]
pub struct QuizSession {
    subject: String,
    questions: Arc<[QuestionRecord]>,
    current_index: usize,
    score: usize,
    answered: bool,
}

impl QuizSession {
    /// Start a session at the first question of `subject`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownSubject` if the catalog has no such subject.
    pub fn start(catalog: &QuizCatalog, subject: &str) -> Result<Self, QuizError> {
        let questions = catalog
            .questions(subject)
            .ok_or_else(|| QuizError::UnknownSubject(subject.to_string()))?;

        Ok(Self {
            subject: subject.to_string(),
            questions: Arc::clone(questions),
            current_index: 0,
            score: 0,
            answered: false,
        })
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.current_index < self.questions.len() {
            QuizPhase::Active
        } else {
            QuizPhase::Completed
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == QuizPhase::Completed
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    /// Fraction of the subject already passed, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        self.current_index as f64 / self.questions.len() as f64
    }

    /// Returns the score report once every question has been passed.
    #[must_use]
    pub fn summary(&self) -> Option<CompletionSummary> {
        self.is_complete()
            .then(|| CompletionSummary::new(self.score, self.total()))
    }

    /// Answer the current question.
    pub fn select_option(&mut self, option_index: usize) -> AnswerOutcome {
        if self.answered {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return AnswerOutcome::Ignored;
        };
        if option_index >= question.options().len() {
            return AnswerOutcome::Ignored;
        }

        self.answered = true;
        if question.is_correct(option_index) {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                correct_answer: question.correct_option().to_string(),
            }
        }
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.answered {
            return AdvanceOutcome::Ignored;
        }
        self.answered = false;
        self.current_index += 1;
        if self.is_complete() {
            AdvanceOutcome::Completed
        } else {
            AdvanceOutcome::Advanced
        }
    }

    /// Back to the first question with a clean score.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answered = false;
    }

    /// Switch to another subject, starting it from the beginning.
    ///
    /// Re-selecting the active subject keeps the current progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownSubject` and leaves the session untouched if
    /// the catalog has no such subject.
    pub fn select_subject(&mut self, catalog: &QuizCatalog, subject: &str) -> Result<bool, QuizError> {
        if subject == self.subject {
            return Ok(false);
        }
        *self = Self::start(catalog, subject)?;
        Ok(true)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("subject", &self.subject)
            .field("questions_len", &self.questions.len())
            .field("current_index", &self.current_index)
            .field("score", &self.score)
            .field("answered", &self.answered)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn programming() -> QuizSession {
        QuizSession::start(&QuizCatalog::builtin(), "Programming").unwrap()
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        let err = QuestionRecord::new("Q", vec!["a".into(), "b".into()], 2).unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 });
        assert_eq!(
            QuestionRecord::new("  ", vec!["a".into()], 0).unwrap_err(),
            QuestionError::EmptyPrompt
        );
        assert_eq!(
            QuestionRecord::new("Q", Vec::new(), 0).unwrap_err(),
            QuestionError::NoOptions
        );
        assert_eq!(
            QuestionRecord::new("Q", vec!["a".into(), " ".into()], 0).unwrap_err(),
            QuestionError::EmptyOption { index: 1 }
        );
    }

    #[test]
    fn correct_answer_scores_and_advance_resets_answered() {
        let mut session = programming();

        assert_eq!(session.select_option(1), AnswerOutcome::Correct);
        assert_eq!(session.score(), 1);
        assert!(session.is_answered());

        assert_eq!(session.advance(), AdvanceOutcome::Advanced);
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_answered());
    }

    #[test]
    fn incorrect_answer_reports_correct_option_text() {
        let mut session = programming();
        assert_eq!(
            session.select_option(0),
            AnswerOutcome::Incorrect {
                correct_answer: "A container for storing data values".to_string()
            }
        );
        assert_eq!(session.score(), 0);
        assert!(session.is_answered());
    }

    #[test]
    fn second_selection_is_ignored() {
        let mut session = programming();
        session.select_option(0);
        assert_eq!(session.select_option(1), AnswerOutcome::Ignored);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = programming();
        assert_eq!(session.advance(), AdvanceOutcome::Ignored);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn answering_every_question_completes_the_quiz() {
        let catalog = QuizCatalog::builtin();
        for subject in catalog.subject_names() {
            let mut session = QuizSession::start(&catalog, subject).unwrap();
            let total = session.total();
            let mut last_score = 0;
            for step in 0..total {
                assert_eq!(session.phase(), QuizPhase::Active);
                session.select_option(0);
                assert!(session.score() >= last_score);
                assert!(session.score() <= step + 1);
                last_score = session.score();
                session.advance();
            }
            assert_eq!(session.phase(), QuizPhase::Completed);
            assert_eq!(session.current_index(), total);
            assert!(session.current_question().is_none());
            assert_eq!(session.select_option(0), AnswerOutcome::Ignored);
        }
    }

    #[test]
    fn restart_clears_progress_from_any_state() {
        let mut session = programming();
        session.select_option(1);
        session.restart();
        assert_eq!(
            (session.current_index(), session.score(), session.is_answered()),
            (0, 0, false)
        );

        session.select_option(1);
        session.advance();
        session.select_option(1);
        session.advance();
        assert!(session.is_complete());
        session.restart();
        assert_eq!(
            (session.current_index(), session.score(), session.is_answered()),
            (0, 0, false)
        );
    }

    #[test]
    fn switching_subject_drops_stale_progress() {
        let catalog = QuizCatalog::builtin();
        let mut session = programming();
        session.select_option(1);
        session.advance();

        assert!(session.select_subject(&catalog, "Science").unwrap());
        assert_eq!(session.subject(), "Science");
        assert_eq!(
            (session.current_index(), session.score(), session.is_answered()),
            (0, 0, false)
        );
    }

    #[test]
    fn unknown_subject_leaves_session_untouched() {
        let catalog = QuizCatalog::builtin();
        let mut session = programming();
        session.select_option(1);

        let err = session.select_subject(&catalog, "History").unwrap_err();
        assert_eq!(err, QuizError::UnknownSubject("History".to_string()));
        assert_eq!(session.subject(), "Programming");
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn tiers_are_inclusive_on_lower_bound() {
        assert_eq!(PerformanceTier::from_percentage(80.0), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_percentage(79.9), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_percentage(60.0), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_percentage(59.9), PerformanceTier::NeedsReview);
    }

    #[test]
    fn summary_is_available_only_when_complete() {
        let mut session = programming();
        assert!(session.summary().is_none());
        session.select_option(1);
        session.advance();
        session.select_option(0);
        session.advance();

        let summary = session.summary().unwrap();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.total, 2);
        assert!((summary.percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(summary.tier, PerformanceTier::NeedsReview);
    }
}
