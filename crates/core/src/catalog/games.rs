use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{Level, LevelError, MathLevel, MemoryLevel, PuzzleLevel};

/// Symbols dealt onto memory boards, in the order boards take them.
pub const MEMORY_SYMBOLS: [&str; 8] = ["🌟", "🎨", "🎵", "🎮", "🎲", "🎭", "🎪", "🎯"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    #[default]
    MemoryMatch,
    CodePuzzle,
    MathChallenge,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [
        GameKind::MemoryMatch,
        GameKind::CodePuzzle,
        GameKind::MathChallenge,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GameKind::MemoryMatch => "Memory Match",
            GameKind::CodePuzzle => "Code Puzzle",
            GameKind::MathChallenge => "Math Challenge",
        }
    }

    /// Level labels in display order.
    #[must_use]
    pub fn level_labels(self) -> Vec<&'static str> {
        match self {
            GameKind::MemoryMatch => MemoryLevel::ALL.iter().map(|l| l.label()).collect(),
            GameKind::CodePuzzle => PuzzleLevel::ALL.iter().map(|l| l.label()).collect(),
            GameKind::MathChallenge => MathLevel::ALL.iter().map(|l| l.label()).collect(),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameKind {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LevelError::Unknown {
                kind: "game",
                raw: s.to_string(),
            })
    }
}

/// Selector card content for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    pub kind: GameKind,
    pub icon: &'static str,
    pub description: &'static str,
}

impl GameInfo {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn levels(&self) -> Vec<&'static str> {
        self.kind.level_labels()
    }
}

static GAMES: [GameInfo; 3] = [
    GameInfo {
        kind: GameKind::MemoryMatch,
        icon: "🎴",
        description: "Challenge your memory by matching pairs of cards in this engaging memory game. Perfect for improving concentration and recall abilities.",
    },
    GameInfo {
        kind: GameKind::CodePuzzle,
        icon: "🧩",
        description: "Enhance your programming skills by arranging code snippets in the correct order. Learn proper code structure while having fun.",
    },
    GameInfo {
        kind: GameKind::MathChallenge,
        icon: "🔢",
        description: "Test your mathematical prowess with timed arithmetic challenges. Improve your mental math skills and problem-solving speed.",
    },
];

/// The games offered by the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameCatalog;

impl GameCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self
    }

    #[must_use]
    pub fn games(&self) -> &'static [GameInfo] {
        &GAMES
    }

    #[must_use]
    pub fn get(&self, kind: GameKind) -> &'static GameInfo {
        match kind {
            GameKind::MemoryMatch => &GAMES[0],
            GameKind::CodePuzzle => &GAMES[1],
            GameKind::MathChallenge => &GAMES[2],
        }
    }

    #[must_use]
    pub fn memory_symbols(&self) -> &'static [&'static str] {
        &MEMORY_SYMBOLS
    }
}

/// Lines of a short program and the order that assembles it.
#[derive(Debug, PartialEq, Eq)]
pub struct CodePuzzle {
    pub snippets: &'static [&'static str],
    pub solution: &'static [usize],
}

static BEGINNER: CodePuzzle = CodePuzzle {
    snippets: &[
        "print('Hello, World!')",
        "name = input('Enter your name: ')",
        "print(f'Welcome, {name}!')",
    ],
    solution: &[0, 1, 2],
};

static INTERMEDIATE: CodePuzzle = CodePuzzle {
    snippets: &[
        "def calculate_sum(numbers):",
        "    total = 0",
        "    for num in numbers:",
        "        total += num",
        "    return total",
    ],
    solution: &[0, 1, 2, 3, 4],
};

static ADVANCED: CodePuzzle = CodePuzzle {
    snippets: &[
        "class Calculator:",
        "    def __init__(self):",
        "        self.result = 0",
        "    def add(self, num):",
        "        self.result += num",
        "    def get_result(self):",
        "        return self.result",
    ],
    solution: &[0, 1, 2, 3, 4, 5, 6],
};

#[must_use]
pub fn code_puzzle(level: PuzzleLevel) -> &'static CodePuzzle {
    match level {
        PuzzleLevel::Beginner => &BEGINNER,
        PuzzleLevel::Intermediate => &INTERMEDIATE,
        PuzzleLevel::Advanced => &ADVANCED,
    }
}
