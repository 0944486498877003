mod feedback_vm;
mod games_vm;
mod quiz_vm;

pub use feedback_vm::{FeedbackVm, map_feedback};
pub use games_vm::{
    BoardVm, GameOptionVm, GamesScreenVm, GamesVm, MemoryCellVm, level_event, map_games_screen,
    start_games,
};
pub use quiz_vm::{CompletionVm, OptionVm, QuizScreenVm, QuizVm, map_quiz_screen, start_quiz};
