use crate::catalog::{CodePuzzle, code_puzzle};
use crate::model::level::PuzzleLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleVerdict {
    Solved,
}

impl PuzzleVerdict {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            PuzzleVerdict::Solved => "Great job! Your code is in the correct order!",
        }
    }
}

/// The code puzzle currently shown for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSession {
    level: PuzzleLevel,
    puzzle: &'static CodePuzzle,
}

impl PuzzleSession {
    #[must_use]
    pub fn new(level: PuzzleLevel) -> Self {
        Self {
            level,
            puzzle: code_puzzle(level),
        }
    }

    #[must_use]
    pub fn level(&self) -> PuzzleLevel {
        self.level
    }

    #[must_use]
    pub fn puzzle(&self) -> &'static CodePuzzle {
        self.puzzle
    }

    /// Load the puzzle for `level`.
    pub fn new_puzzle(&mut self, level: PuzzleLevel) {
        *self = Self::new(level);
    }

    /// Report the learner's arrangement as solved.
    ///
    /// Snippets are shown in solution order and cannot be rearranged yet, so
    /// no ordering check is performed: this always returns `Solved`.
    // TODO: compare a learner-supplied arrangement with `CodePuzzle::solution`
    // once the board supports reordering snippets.
    #[must_use]
    pub fn check_solution(&self) -> PuzzleVerdict {
        PuzzleVerdict::Solved
    }
}
