use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("unknown {kind}: {raw:?}")]
    Unknown { kind: &'static str, raw: String },
}

/// Difficulty levels share a label table and parse from their label.
pub trait Level: Copy + Sized + 'static {
    /// Every level in display order.
    const ALL: &'static [Self];
    /// Human name used in error messages.
    const KIND: &'static str;

    fn label(self) -> &'static str;
}

fn parse_level<L: Level>(raw: &str) -> Result<L, LevelError> {
    let wanted = raw.trim();
    L::ALL
        .iter()
        .copied()
        .find(|level| level.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| LevelError::Unknown {
            kind: L::KIND,
            raw: raw.to_string(),
        })
}

//
// ─── MEMORY MATCH ──────────────────────────────────────────────────────────────
//

/// Grid dimensions for a memory-match board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    #[must_use]
    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub fn pair_count(self) -> usize {
        self.cell_count() / 2
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryLevel {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl MemoryLevel {
    /// Easy 2×2, Medium 3×4, Hard 4×4.
    #[must_use]
    pub fn grid(self) -> GridSize {
        match self {
            MemoryLevel::Easy => GridSize { rows: 2, cols: 2 },
            MemoryLevel::Medium => GridSize { rows: 3, cols: 4 },
            MemoryLevel::Hard => GridSize { rows: 4, cols: 4 },
        }
    }
}

impl Level for MemoryLevel {
    const ALL: &'static [Self] = &[MemoryLevel::Easy, MemoryLevel::Medium, MemoryLevel::Hard];
    const KIND: &'static str = "memory level";

    fn label(self) -> &'static str {
        match self {
            MemoryLevel::Easy => "Easy",
            MemoryLevel::Medium => "Medium",
            MemoryLevel::Hard => "Hard",
        }
    }
}

//
// ─── CODE PUZZLE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level for PuzzleLevel {
    const ALL: &'static [Self] = &[
        PuzzleLevel::Beginner,
        PuzzleLevel::Intermediate,
        PuzzleLevel::Advanced,
    ];
    const KIND: &'static str = "puzzle level";

    fn label(self) -> &'static str {
        match self {
            PuzzleLevel::Beginner => "Beginner",
            PuzzleLevel::Intermediate => "Intermediate",
            PuzzleLevel::Advanced => "Advanced",
        }
    }
}

//
// ─── MATH CHALLENGE ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MathLevel {
    #[default]
    Basic,
    Advanced,
    Expert,
}

impl Level for MathLevel {
    const ALL: &'static [Self] = &[MathLevel::Basic, MathLevel::Advanced, MathLevel::Expert];
    const KIND: &'static str = "math level";

    fn label(self) -> &'static str {
        match self {
            MathLevel::Basic => "Basic",
            MathLevel::Advanced => "Advanced",
            MathLevel::Expert => "Expert",
        }
    }
}

// ─── Display / FromStr ─────────────────────────────────────────────────────────

impl fmt::Display for MemoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PuzzleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MathLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MemoryLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s)
    }
}

impl FromStr for PuzzleLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s)
    }
}

impl FromStr for MathLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s)
    }
}
