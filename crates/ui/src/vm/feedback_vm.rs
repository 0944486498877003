use services::{Feedback, FeedbackTone};

/// Feedback line with its CSS class and decorations applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub class: &'static str,
    pub text: String,
}

#[must_use]
pub fn map_feedback(feedback: &Feedback) -> Option<FeedbackVm> {
    if feedback.is_none() {
        return None;
    }

    let message = feedback.message();
    let text = match feedback {
        Feedback::Correct => format!("✅ {message}"),
        Feedback::Incorrect { .. } => format!("❌ {message}"),
        Feedback::TryAgain | Feedback::PairMismatched => format!("{message} 🔄"),
        Feedback::InvalidNumber => format!("{message} 🔢"),
        Feedback::PairMatched | Feedback::PuzzleSolved => format!("{message} 🎉"),
        Feedback::None => message,
    };
    let class = match feedback.tone() {
        FeedbackTone::Success => "feedback feedback--success",
        FeedbackTone::Error => "feedback feedback--error",
        FeedbackTone::Neutral => "feedback",
    };

    Some(FeedbackVm { class, text })
}
