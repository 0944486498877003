use std::fmt;

use rand::rngs::StdRng;

use elara_core::RandomSource;
use elara_core::catalog::{GameCatalog, GameKind};
use elara_core::model::{
    CellId, MathError, MathLevel, MathSession, MemoryLevel, MemoryScoring, MemorySession,
    PuzzleLevel, PuzzleSession, PuzzleVerdict, RevealOutcome, SubmitOutcome,
};

use super::snapshot::{GameBoard, GameSnapshot, MathBoard, MemoryBoard, PuzzleBoard};
use crate::error::GameServiceError;
use crate::feedback::Feedback;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryEvent {
    NewGame(MemoryLevel),
    Reveal(CellId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleEvent {
    NewPuzzle(PuzzleLevel),
    CheckSolution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathEvent {
    NewGame(MathLevel),
    Submit(String),
}

/// Learner actions on the games page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    SelectGame(GameKind),
    Memory(MemoryEvent),
    Puzzle(PuzzleEvent),
    Math(MathEvent),
}

/// Knobs for a games session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSettings {
    pub random: RandomSource,
    pub memory_scoring: MemoryScoring,
}

/// Owns one learner's three game sessions and the game selector.
///
/// Each game keeps its state while another one is shown. Feedback belongs to
/// the visible game and is cleared when the selection changes.
pub struct GameService {
    catalog: GameCatalog,
    settings: GameSettings,
    rng: StdRng,
    selected: GameKind,
    memory: MemorySession,
    puzzle: PuzzleSession,
    math: MathSession,
    feedback: Feedback,
}

impl GameService {
    /// Deal every game at its easiest level, showing the first game.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Memory` if the catalog cannot fill a board.
    pub fn new(catalog: GameCatalog, settings: GameSettings) -> Result<Self, GameServiceError> {
        let mut rng = settings.random.rng();
        let memory = MemorySession::new_game(
            MemoryLevel::default(),
            catalog.memory_symbols(),
            settings.memory_scoring,
            &mut rng,
        )?;
        let math = MathSession::new(MathLevel::default(), &mut rng);

        tracing::debug!(
            seeded = settings.random.is_seeded(),
            scoring = ?settings.memory_scoring,
            "game session started"
        );

        Ok(Self {
            catalog,
            settings,
            rng,
            selected: GameKind::default(),
            memory,
            puzzle: PuzzleSession::new(PuzzleLevel::default()),
            math,
            feedback: Feedback::None,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn selected(&self) -> GameKind {
        self.selected
    }

    #[must_use]
    pub fn memory(&self) -> &MemorySession {
        &self.memory
    }

    #[must_use]
    pub fn puzzle(&self) -> &PuzzleSession {
        &self.puzzle
    }

    #[must_use]
    pub fn math(&self) -> &MathSession {
        &self.math
    }

    /// Replace the math session wholesale, e.g. to pin a known question.
    pub fn set_math_session(&mut self, session: MathSession) {
        self.math = session;
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let board = match self.selected {
            GameKind::MemoryMatch => GameBoard::Memory(MemoryBoard::from_session(&self.memory)),
            GameKind::CodePuzzle => GameBoard::Puzzle(PuzzleBoard::from_session(&self.puzzle)),
            GameKind::MathChallenge => GameBoard::Math(MathBoard::from_session(&self.math)),
        };
        GameSnapshot {
            selected: self.selected,
            info: self.catalog.get(self.selected),
            board,
            feedback: self.feedback.clone(),
        }
    }

    /// Apply one learner action.
    ///
    /// Game events are applied to their game even when another game is
    /// selected; the snapshot always shows the selected game.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Memory` for cells that are not on the board
    /// and `GameServiceError::Math` for a math failure other than a
    /// non-numeric answer, which is reported as feedback instead.
    pub fn handle(&mut self, event: GameEvent) -> Result<GameSnapshot, GameServiceError> {
        match event {
            GameEvent::SelectGame(kind) => {
                if kind != self.selected {
                    tracing::info!(game = %kind, "game selected");
                    self.selected = kind;
                    self.feedback = Feedback::None;
                }
            }
            GameEvent::Memory(event) => self.handle_memory(event)?,
            GameEvent::Puzzle(event) => self.handle_puzzle(event),
            GameEvent::Math(event) => self.handle_math(event)?,
        }

        Ok(self.snapshot())
    }

    fn handle_memory(&mut self, event: MemoryEvent) -> Result<(), GameServiceError> {
        match event {
            MemoryEvent::NewGame(level) => {
                self.memory = MemorySession::new_game(
                    level,
                    self.catalog.memory_symbols(),
                    self.settings.memory_scoring,
                    &mut self.rng,
                )?;
                self.feedback = Feedback::None;
                tracing::info!(%level, "memory board dealt");
            }
            MemoryEvent::Reveal(cell) => {
                let outcome = self.memory.reveal_cell(cell)?;
                tracing::debug!(%cell, ?outcome, score = self.memory.score(), "memory cell revealed");
                self.feedback = match outcome {
                    RevealOutcome::Matched => Feedback::PairMatched,
                    RevealOutcome::Mismatched => Feedback::PairMismatched,
                    RevealOutcome::Revealed | RevealOutcome::AlreadyRevealed => Feedback::None,
                };
            }
        }
        Ok(())
    }

    fn handle_puzzle(&mut self, event: PuzzleEvent) {
        match event {
            PuzzleEvent::NewPuzzle(level) => {
                self.puzzle.new_puzzle(level);
                self.feedback = Feedback::None;
                tracing::info!(%level, "code puzzle loaded");
            }
            PuzzleEvent::CheckSolution => match self.puzzle.check_solution() {
                PuzzleVerdict::Solved => {
                    tracing::debug!(level = %self.puzzle.level(), "code puzzle checked");
                    self.feedback = Feedback::PuzzleSolved;
                }
            },
        }
    }

    fn handle_math(&mut self, event: MathEvent) -> Result<(), GameServiceError> {
        match event {
            MathEvent::NewGame(level) => {
                self.math.new_game(level, &mut self.rng);
                self.feedback = Feedback::None;
                tracing::info!(%level, "math challenge started");
            }
            MathEvent::Submit(raw) => {
                self.feedback = match self.math.submit_answer(&raw, &mut self.rng) {
                    Ok(SubmitOutcome::Correct) => {
                        tracing::debug!(score = self.math.score(), "math answer correct");
                        Feedback::Correct
                    }
                    Ok(SubmitOutcome::TryAgain) => {
                        tracing::debug!(answer = %raw, "math answer wrong");
                        Feedback::TryAgain
                    }
                    Err(MathError::InvalidNumericInput { raw }) => {
                        tracing::debug!(answer = %raw, "math answer is not a number");
                        Feedback::InvalidNumber
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "math answer rejected");
                        return Err(err.into());
                    }
                };
            }
        }
        Ok(())
    }
}

impl fmt::Debug for GameService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameService")
            .field("settings", &self.settings)
            .field("selected", &self.selected)
            .field("memory_level", &self.memory.level())
            .field("puzzle_level", &self.puzzle.level())
            .field("math_level", &self.math.level())
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
