use std::fmt;
use std::sync::Arc;

use elara_core::catalog::QuizCatalog;
use elara_core::model::{AdvanceOutcome, AnswerOutcome, QuizSession};

use super::snapshot::QuizSnapshot;
use crate::error::QuizServiceError;
use crate::feedback::Feedback;

/// Learner actions the quiz understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    SelectSubject(String),
    SelectOption(usize),
    Advance,
    Restart,
}

/// Owns one learner's quiz session and turns UI events into snapshots.
///
/// Every call to `handle` runs the transition to completion before the
/// snapshot is taken.
#[derive(Clone)]
pub struct QuizService {
    catalog: Arc<QuizCatalog>,
    session: QuizSession,
    feedback: Feedback,
}

impl QuizService {
    /// Start a quiz on `subject`, or on the first catalog subject.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the subject is not in the catalog.
    pub fn new(catalog: Arc<QuizCatalog>, subject: Option<&str>) -> Result<Self, QuizServiceError> {
        let subject = subject.unwrap_or_else(|| catalog.first_subject());
        let session = QuizSession::start(&catalog, subject)?;
        tracing::debug!(subject, total = session.total(), "quiz session started");
        Ok(Self {
            catalog,
            session,
            feedback: Feedback::None,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<QuizCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot::from_session(&self.session, &self.feedback)
    }

    /// Apply one learner action.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` for an unknown subject; the session
    /// is left as it was.
    pub fn handle(&mut self, event: QuizEvent) -> Result<QuizSnapshot, QuizServiceError> {
        match event {
            QuizEvent::SelectSubject(subject) => {
                if self.session.select_subject(&self.catalog, &subject)? {
                    tracing::info!(subject = %subject, "quiz subject changed");
                    self.feedback = Feedback::None;
                }
            }
            QuizEvent::SelectOption(option) => self.select_option(option),
            QuizEvent::Advance => match self.session.advance() {
                AdvanceOutcome::Advanced => self.feedback = Feedback::None,
                AdvanceOutcome::Completed => {
                    self.feedback = Feedback::None;
                    tracing::info!(
                        subject = self.session.subject(),
                        score = self.session.score(),
                        total = self.session.total(),
                        "quiz completed"
                    );
                }
                AdvanceOutcome::Ignored => {
                    tracing::debug!("advance ignored: current question not answered");
                }
            },
            QuizEvent::Restart => {
                self.session.restart();
                self.feedback = Feedback::None;
                tracing::debug!(subject = self.session.subject(), "quiz restarted");
            }
        }

        Ok(self.snapshot())
    }

    fn select_option(&mut self, option: usize) {
        let index = self.session.current_index();
        match self.session.select_option(option) {
            AnswerOutcome::Correct => {
                tracing::debug!(index, option, "quiz answer correct");
                self.feedback = Feedback::Correct;
            }
            AnswerOutcome::Incorrect { correct_answer } => {
                tracing::debug!(index, option, "quiz answer incorrect");
                self.feedback = Feedback::Incorrect { correct_answer };
            }
            AnswerOutcome::Ignored => {
                tracing::debug!(index, option, "quiz selection ignored");
            }
        }
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("subjects", &self.catalog.len())
            .field("session", &self.session)
            .field("feedback", &self.feedback)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
