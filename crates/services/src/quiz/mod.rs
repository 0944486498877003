mod progress;
mod service;
mod snapshot;

// Public API of the quiz subsystem.
pub use crate::error::QuizServiceError;
pub use progress::QuizProgress;
pub use service::{QuizEvent, QuizService};
pub use snapshot::{QuestionView, QuizSnapshot};
