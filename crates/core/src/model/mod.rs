mod ids;
mod level;
mod math;
mod memory;
mod puzzle;
mod quiz;

pub use ids::{CellId, ParseIdError};
pub use level::{GridSize, Level, LevelError, MathLevel, MemoryLevel, PuzzleLevel};
pub use math::{
    LevelRules, MathError, MathQuestion, MathSession, Operator, SubmitOutcome, generate_question,
    parse_answer,
};
pub use memory::{MemoryError, MemoryScoring, MemorySession, RevealOutcome};
pub use puzzle::{PuzzleSession, PuzzleVerdict};
pub use quiz::{
    AdvanceOutcome, AnswerOutcome, CompletionSummary, PerformanceTier, QuestionError,
    QuestionRecord, QuizError, QuizPhase, QuizSession,
};
