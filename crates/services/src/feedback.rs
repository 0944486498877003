/// Last outcome shown under a quiz question or game board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect { correct_answer: String },
    TryAgain,
    InvalidNumber,
    PairMatched,
    PairMismatched,
    PuzzleSolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Neutral,
    Success,
    Error,
}

impl Feedback {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Feedback::None)
    }

    #[must_use]
    pub fn tone(&self) -> FeedbackTone {
        match self {
            Feedback::None => FeedbackTone::Neutral,
            Feedback::Correct | Feedback::PairMatched | Feedback::PuzzleSolved => {
                FeedbackTone::Success
            }
            Feedback::Incorrect { .. }
            | Feedback::TryAgain
            | Feedback::InvalidNumber
            | Feedback::PairMismatched => FeedbackTone::Error,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Feedback::None => String::new(),
            Feedback::Correct => "Correct!".to_string(),
            Feedback::Incorrect { correct_answer } => {
                format!("Incorrect. The correct answer was: {correct_answer}")
            }
            Feedback::TryAgain => "Try again!".to_string(),
            Feedback::InvalidNumber => "Please enter a valid number!".to_string(),
            Feedback::PairMatched => "It's a match!".to_string(),
            Feedback::PairMismatched => "Not a match. Try another pair.".to_string(),
            Feedback::PuzzleSolved => {
                elara_core::model::PuzzleVerdict::Solved.message().to_string()
            }
        }
    }
}
