use elara_core::catalog::{GameInfo, GameKind};
use elara_core::model::{
    CellId, MathLevel, MathSession, MemoryLevel, MemoryScoring, MemorySession, PuzzleLevel,
    PuzzleSession,
};

use crate::feedback::Feedback;

/// One memory-match cell. `symbol` is only present while the cell is face-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCell {
    pub id: CellId,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBoard {
    pub level: MemoryLevel,
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells.
    pub cells: Vec<MemoryCell>,
    pub score: u32,
    pub scoring: MemoryScoring,
    pub is_complete: bool,
}

impl MemoryBoard {
    #[must_use]
    pub fn from_session(session: &MemorySession) -> Self {
        let grid = session.grid();
        let cells = (0..session.cell_count())
            .map(CellId::new)
            .map(|id| MemoryCell {
                id,
                symbol: session
                    .is_revealed(id)
                    .then(|| session.symbol_at(id).map(ToString::to_string))
                    .flatten(),
            })
            .collect();

        Self {
            level: session.level(),
            rows: grid.rows,
            cols: grid.cols,
            cells,
            score: session.score(),
            scoring: session.scoring(),
            is_complete: session.is_complete(),
        }
    }

    /// Cells grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[MemoryCell]> {
        self.cells.chunks(self.cols.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleBoard {
    pub level: PuzzleLevel,
    pub snippets: Vec<&'static str>,
}

impl PuzzleBoard {
    #[must_use]
    pub fn from_session(session: &PuzzleSession) -> Self {
        Self {
            level: session.level(),
            snippets: session.puzzle().snippets.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathBoard {
    pub level: MathLevel,
    pub prompt: String,
    pub score: u32,
}

impl MathBoard {
    #[must_use]
    pub fn from_session(session: &MathSession) -> Self {
        Self {
            level: session.level(),
            prompt: session.current().prompt_text().to_string(),
            score: session.score(),
        }
    }
}

/// The board of whichever game is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameBoard {
    Memory(MemoryBoard),
    Puzzle(PuzzleBoard),
    Math(MathBoard),
}

/// Read-only state of the games page after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub selected: GameKind,
    pub info: &'static GameInfo,
    pub board: GameBoard,
    pub feedback: Feedback,
}
