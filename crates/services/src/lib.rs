#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod feedback;
pub mod games;
pub mod quiz;

pub use elara_core::RandomSource;

pub use bank::{load_question_bank, parse_question_bank};
pub use error::{BankError, GameServiceError, QuizServiceError};
pub use feedback::{Feedback, FeedbackTone};
pub use games::{
    GameBoard, GameEvent, GameService, GameSettings, GameSnapshot, MathBoard, MathEvent,
    MemoryBoard, MemoryCell, MemoryEvent, PuzzleBoard, PuzzleEvent,
};
pub use quiz::{QuestionView, QuizEvent, QuizProgress, QuizService, QuizSnapshot};
