use elara_core::catalog::QuizCatalog;
use elara_core::model::PerformanceTier;
use services::{QuizEvent, QuizService, QuizServiceError, QuizSnapshot};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::feedback_vm::{FeedbackVm, map_feedback};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub score_line: String,
    pub percentage_line: String,
    pub tier_message: String,
    pub celebrate: bool,
}

/// Everything the quiz page renders, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub subject: String,
    pub subjects: Vec<String>,
    pub heading: Option<String>,
    pub prompt: Option<String>,
    pub options: Vec<OptionVm>,
    /// Options stay clickable until one has been chosen.
    pub options_enabled: bool,
    pub show_next: bool,
    pub progress_percent: u32,
    pub score_line: String,
    pub feedback: Option<FeedbackVm>,
    pub completion: Option<CompletionVm>,
}

fn tier_icon(tier: PerformanceTier) -> &'static str {
    match tier {
        PerformanceTier::Excellent => "🌟",
        PerformanceTier::Good => "👍",
        PerformanceTier::NeedsReview => "📚",
    }
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn map_quiz_screen(snapshot: &QuizSnapshot, catalog: &QuizCatalog) -> QuizScreenVm {
    let progress_percent = (snapshot.progress.fraction() * 100.0).round().clamp(0.0, 100.0) as u32;
    let (heading, prompt, options) = match &snapshot.question {
        Some(question) => (
            Some(format!("Question {}", question.number)),
            Some(question.prompt.clone()),
            question
                .options
                .iter()
                .enumerate()
                .map(|(index, label)| OptionVm {
                    index,
                    label: label.clone(),
                })
                .collect(),
        ),
        None => (None, None, Vec::new()),
    };

    let completion = snapshot.summary.map(|summary| CompletionVm {
        score_line: format!(
            "Quiz completed! Your score: {}/{}",
            summary.score, summary.total
        ),
        percentage_line: format!("Percentage: {:.1}%", summary.percentage),
        tier_message: format!("{} {}", tier_icon(summary.tier), summary.tier.message()),
        celebrate: summary.tier == PerformanceTier::Excellent,
    });

    QuizScreenVm {
        subject: snapshot.subject.clone(),
        subjects: catalog.subject_names().map(ToString::to_string).collect(),
        heading,
        prompt,
        options,
        options_enabled: !snapshot.answered,
        show_next: snapshot.answered && !snapshot.is_complete(),
        progress_percent,
        score_line: format!("Score: {}", snapshot.score),
        feedback: map_feedback(&snapshot.feedback),
        completion,
    }
}

/// Quiz page state: one service per mounted view.
pub struct QuizVm {
    service: QuizService,
}

impl QuizVm {
    #[must_use]
    pub fn new(service: QuizService) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        map_quiz_screen(&self.service.snapshot(), self.service.catalog())
    }

    /// # Errors
    ///
    /// Returns `ViewError::UnknownSubject` when switching to a subject the
    /// catalog does not hold.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<(), ViewError> {
        self.service.handle(event).map(|_| ()).map_err(|err| {
            tracing::warn!(error = %err, "quiz event rejected");
            map_quiz_error(&err)
        })
    }
}

fn map_quiz_error(err: &QuizServiceError) -> ViewError {
    match err {
        QuizServiceError::Quiz(_) => ViewError::UnknownSubject,
        _ => ViewError::Unknown,
    }
}

/// # Errors
///
/// Returns `ViewError::UnknownSubject` if the configured start subject is missing.
pub fn start_quiz(ctx: &AppContext) -> Result<QuizVm, ViewError> {
    ctx.start_quiz().map(QuizVm::new).map_err(|err| {
        tracing::error!(error = %err, "quiz could not start");
        map_quiz_error(&err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn quiz() -> QuizVm {
        let catalog = Arc::new(QuizCatalog::builtin());
        QuizVm::new(QuizService::new(catalog, None).unwrap())
    }

    #[test]
    fn fresh_quiz_shows_first_question() {
        let screen = quiz().screen();
        assert_eq!(screen.subject, "AI & Machine Learning");
        assert_eq!(
            screen.subjects,
            vec!["AI & Machine Learning", "Programming", "Science"]
        );
        assert_eq!(screen.heading.as_deref(), Some("Question 1"));
        assert_eq!(screen.options.len(), 4);
        assert!(screen.options_enabled);
        assert!(!screen.show_next);
        assert_eq!(screen.progress_percent, 0);
        assert_eq!(screen.feedback, None);
        assert_eq!(screen.completion, None);
    }

    #[test]
    fn answering_locks_options_and_offers_next() {
        let mut vm = quiz();
        vm.dispatch(QuizEvent::SelectOption(0)).unwrap();
        let screen = vm.screen();
        assert!(!screen.options_enabled);
        assert!(screen.show_next);
        assert_eq!(screen.score_line, "Score: 1");
        assert_eq!(screen.feedback.unwrap().text, "✅ Correct!");

        vm.dispatch(QuizEvent::Advance).unwrap();
        let screen = vm.screen();
        assert_eq!(screen.heading.as_deref(), Some("Question 2"));
        assert_eq!(screen.progress_percent, 50);
    }

    #[test]
    fn finished_quiz_formats_summary() {
        let mut vm = quiz();
        vm.dispatch(QuizEvent::SelectOption(0)).unwrap();
        vm.dispatch(QuizEvent::Advance).unwrap();
        vm.dispatch(QuizEvent::SelectOption(0)).unwrap();
        vm.dispatch(QuizEvent::Advance).unwrap();

        let screen = vm.screen();
        assert_eq!(screen.prompt, None);
        assert!(!screen.show_next);
        assert_eq!(screen.progress_percent, 100);
        let completion = screen.completion.unwrap();
        assert_eq!(completion.score_line, "Quiz completed! Your score: 1/2");
        assert_eq!(completion.percentage_line, "Percentage: 50.0%");
        assert_eq!(
            completion.tier_message,
            "📚 Keep learning! Review the topics and try again."
        );
        assert!(!completion.celebrate);
    }

    #[test]
    fn perfect_run_gets_the_excellent_badge() {
        let mut vm = quiz();
        vm.dispatch(QuizEvent::SelectOption(0)).unwrap();
        vm.dispatch(QuizEvent::Advance).unwrap();
        vm.dispatch(QuizEvent::SelectOption(2)).unwrap();
        vm.dispatch(QuizEvent::Advance).unwrap();

        let completion = vm.screen().completion.unwrap();
        assert_eq!(completion.percentage_line, "Percentage: 100.0%");
        assert_eq!(
            completion.tier_message,
            "🌟 Excellent performance! You've mastered this subject!"
        );
        assert!(completion.celebrate);
    }

    #[test]
    fn good_tier_uses_thumbs_up() {
        assert_eq!(tier_icon(PerformanceTier::Good), "👍");
    }

    #[test]
    fn unknown_subject_maps_to_view_error() {
        let mut vm = quiz();
        let err = vm
            .dispatch(QuizEvent::SelectSubject("Astrology".to_string()))
            .unwrap_err();
        assert_eq!(err, ViewError::UnknownSubject);
        assert_eq!(vm.screen().subject, "AI & Machine Learning");
    }
}
