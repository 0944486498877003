use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::ids::CellId;
use crate::model::level::{GridSize, MemoryLevel};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MemoryError {
    #[error("{cell} is not on a board of {cells} cells")]
    UnknownCell { cell: CellId, cells: usize },

    #[error("board needs {needed} symbols but only {available} are available")]
    NotEnoughSymbols { needed: usize, available: usize },
}

//
// ─── SCORING ───────────────────────────────────────────────────────────────────
//

/// How reveals turn into points.
///
/// `RevealCount` scores every first reveal of a cell, whether or not it
/// completes a pair. That is how the game has always scored and stays the
/// default until product decides otherwise. `PairMatch` is opt-in and scores
/// one point per matched pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemoryScoring {
    #[default]
    RevealCount,
    PairMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell turned face-up.
    Revealed,
    /// The cell was already face-up; nothing changed.
    AlreadyRevealed,
    /// Pair matching only: the cell completed a pair.
    Matched,
    /// Pair matching only: the cell did not match the first pick. Both stay
    /// face-up until the next reveal.
    Mismatched,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// A shuffled memory-match board and the learner's progress on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySession {
    level: MemoryLevel,
    grid: GridSize,
    scoring: MemoryScoring,
    cells: Vec<String>,
    revealed: BTreeSet<CellId>,
    pending: Option<CellId>,
    mismatch: Option<(CellId, CellId)>,
    score: u32,
}

impl MemorySession {
    /// Deal a new board: the first `pairs` symbols, each twice, uniformly shuffled.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::NotEnoughSymbols` if `symbols` cannot fill the grid.
    pub fn new_game<S, R>(
        level: MemoryLevel,
        symbols: &[S],
        scoring: MemoryScoring,
        rng: &mut R,
    ) -> Result<Self, MemoryError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let grid = level.grid();
        let pairs = grid.pair_count();
        if symbols.len() < pairs {
            return Err(MemoryError::NotEnoughSymbols {
                needed: pairs,
                available: symbols.len(),
            });
        }

        let mut cells: Vec<String> = symbols[..pairs]
            .iter()
            .chain(symbols[..pairs].iter())
            .map(|symbol| symbol.as_ref().to_string())
            .collect();
        cells.shuffle(rng);

        Ok(Self {
            level,
            grid,
            scoring,
            cells,
            revealed: BTreeSet::new(),
            pending: None,
            mismatch: None,
            score: 0,
        })
    }

    #[must_use]
    pub fn level(&self) -> MemoryLevel {
        self.level
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn scoring(&self) -> MemoryScoring {
        self.scoring
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Symbol under a cell, whether or not it is face-up.
    #[must_use]
    pub fn symbol_at(&self, cell: CellId) -> Option<&str> {
        self.cells.get(cell.value()).map(String::as_str)
    }

    #[must_use]
    pub fn is_revealed(&self, cell: CellId) -> bool {
        self.revealed.contains(&cell)
    }

    /// Every face-up cell is final (no pending mismatch) and none are hidden.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.len() == self.cells.len() && self.mismatch.is_none()
    }

    /// Turn a cell face-up.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::UnknownCell` if the id is off the board.
    pub fn reveal_cell(&mut self, cell: CellId) -> Result<RevealOutcome, MemoryError> {
        if cell.value() >= self.cells.len() {
            return Err(MemoryError::UnknownCell {
                cell,
                cells: self.cells.len(),
            });
        }

        match self.scoring {
            MemoryScoring::RevealCount => Ok(self.reveal_counting(cell)),
            MemoryScoring::PairMatch => Ok(self.reveal_matching(cell)),
        }
    }

    fn reveal_counting(&mut self, cell: CellId) -> RevealOutcome {
        if !self.revealed.insert(cell) {
            return RevealOutcome::AlreadyRevealed;
        }
        self.score = self.score.saturating_add(1);
        RevealOutcome::Revealed
    }

    fn reveal_matching(&mut self, cell: CellId) -> RevealOutcome {
        if let Some((first, second)) = self.mismatch.take() {
            self.revealed.remove(&first);
            self.revealed.remove(&second);
        }
        if !self.revealed.insert(cell) {
            return RevealOutcome::AlreadyRevealed;
        }

        let Some(first) = self.pending.take() else {
            self.pending = Some(cell);
            return RevealOutcome::Revealed;
        };

        if self.cells[first.value()] == self.cells[cell.value()] {
            self.score = self.score.saturating_add(1);
            RevealOutcome::Matched
        } else {
            self.mismatch = Some((first, cell));
            RevealOutcome::Mismatched
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MEMORY_SYMBOLS;
    use crate::random::fixed_source;
    use std::collections::HashMap;

    fn board(level: MemoryLevel, scoring: MemoryScoring) -> MemorySession {
        let mut rng = fixed_source().rng();
        MemorySession::new_game(level, &MEMORY_SYMBOLS, scoring, &mut rng).unwrap()
    }

    fn find_pair(session: &MemorySession) -> (CellId, CellId) {
        let mut seen: HashMap<&str, CellId> = HashMap::new();
        for idx in 0..session.cell_count() {
            let id = CellId::new(idx);
            let symbol = session.symbol_at(id).unwrap();
            if let Some(first) = seen.get(symbol) {
                return (*first, id);
            }
            seen.insert(symbol, id);
        }
        panic!("board has no pair");
    }

    #[test]
    fn hard_board_has_eight_symbols_twice() {
        let session = board(MemoryLevel::Hard, MemoryScoring::RevealCount);
        assert_eq!(session.cell_count(), 16);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for idx in 0..session.cell_count() {
            *counts.entry(session.symbol_at(CellId::new(idx)).unwrap()).or_default() += 1;
        }
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|count| *count == 2));
    }

    #[test]
    fn boards_use_the_leading_symbols() {
        let session = board(MemoryLevel::Easy, MemoryScoring::RevealCount);
        let mut symbols: Vec<&str> = (0..session.cell_count())
            .map(|idx| session.symbol_at(CellId::new(idx)).unwrap())
            .collect();
        symbols.sort_unstable();
        let mut expected = vec![MEMORY_SYMBOLS[0], MEMORY_SYMBOLS[0], MEMORY_SYMBOLS[1], MEMORY_SYMBOLS[1]];
        expected.sort_unstable();
        assert_eq!(symbols, expected);
    }

    #[test]
    fn reveal_count_scores_every_first_reveal() {
        let mut session = board(MemoryLevel::Medium, MemoryScoring::RevealCount);

        assert_eq!(session.reveal_cell(CellId::new(0)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(session.reveal_cell(CellId::new(5)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(session.score(), 2);

        assert_eq!(
            session.reveal_cell(CellId::new(0)).unwrap(),
            RevealOutcome::AlreadyRevealed
        );
        assert_eq!(session.score(), 2);
        assert!(session.is_revealed(CellId::new(5)));
    }

    #[test]
    fn revealing_every_cell_completes_the_board() {
        let mut session = board(MemoryLevel::Easy, MemoryScoring::RevealCount);
        for idx in 0..4 {
            session.reveal_cell(CellId::new(idx)).unwrap();
        }
        assert!(session.is_complete());
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn off_board_cells_are_rejected() {
        let mut session = board(MemoryLevel::Easy, MemoryScoring::RevealCount);
        let err = session.reveal_cell(CellId::new(4)).unwrap_err();
        assert_eq!(err, MemoryError::UnknownCell { cell: CellId::new(4), cells: 4 });
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn too_few_symbols_is_an_error() {
        let mut rng = fixed_source().rng();
        let err = MemorySession::new_game(MemoryLevel::Hard, &["a", "b"], MemoryScoring::RevealCount, &mut rng)
            .unwrap_err();
        assert_eq!(err, MemoryError::NotEnoughSymbols { needed: 8, available: 2 });
    }

    #[test]
    fn pair_match_scores_matched_pairs_only() {
        let mut session = board(MemoryLevel::Hard, MemoryScoring::PairMatch);
        let (first, second) = find_pair(&session);

        assert_eq!(session.reveal_cell(first).unwrap(), RevealOutcome::Revealed);
        assert_eq!(session.score(), 0);
        assert_eq!(session.reveal_cell(second).unwrap(), RevealOutcome::Matched);
        assert_eq!(session.score(), 1);
        assert!(session.is_revealed(first));
        assert!(session.is_revealed(second));
    }

    #[test]
    fn pair_match_hides_mismatch_on_next_reveal() {
        let mut session = board(MemoryLevel::Hard, MemoryScoring::PairMatch);
        let first = CellId::new(0);
        let other = (1..16)
            .map(CellId::new)
            .find(|id| session.symbol_at(*id) != session.symbol_at(first))
            .unwrap();
        let third = (1..16)
            .map(CellId::new)
            .find(|id| *id != other)
            .unwrap();

        session.reveal_cell(first).unwrap();
        assert_eq!(session.reveal_cell(other).unwrap(), RevealOutcome::Mismatched);
        assert!(session.is_revealed(first) && session.is_revealed(other));
        assert!(!session.is_complete());

        session.reveal_cell(third).unwrap();
        assert!(!session.is_revealed(first));
        assert!(!session.is_revealed(other));
        assert!(session.is_revealed(third));
        assert_eq!(session.score(), 0);
    }
}
