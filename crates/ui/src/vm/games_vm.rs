use elara_core::catalog::{GameCatalog, GameKind};
use elara_core::model::{Level, MathLevel, MemoryLevel, PuzzleLevel};
use services::{
    GameBoard, GameEvent, GameService, GameSnapshot, MathEvent, MemoryEvent, PuzzleEvent,
};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::feedback_vm::{FeedbackVm, map_feedback};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOptionVm {
    pub value: &'static str,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryCellVm {
    pub id: usize,
    /// Face-up symbol, or the hidden-card glyph.
    pub face: String,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardVm {
    Memory {
        rows: Vec<Vec<MemoryCellVm>>,
        complete: bool,
    },
    Puzzle {
        snippets: Vec<&'static str>,
    },
    Math {
        prompt: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GamesScreenVm {
    pub games: Vec<GameOptionVm>,
    pub selected: &'static str,
    pub title: String,
    pub description: &'static str,
    pub levels_line: String,
    pub levels: Vec<&'static str>,
    pub level: &'static str,
    pub restart_label: &'static str,
    pub board: BoardVm,
    pub score_line: Option<String>,
    pub feedback: Option<FeedbackVm>,
}

const HIDDEN_CARD: &str = "🔄";

#[must_use]
pub fn map_games_screen(snapshot: &GameSnapshot, catalog: &GameCatalog) -> GamesScreenVm {
    let games = catalog
        .games()
        .iter()
        .map(|info| GameOptionVm {
            value: info.name(),
            label: format!("{} {}", info.icon, info.name()),
        })
        .collect();
    let levels = snapshot.info.levels();

    let (level, restart_label, board, score_line) = match &snapshot.board {
        GameBoard::Memory(board) => (
            board.level.label(),
            "New Game",
            BoardVm::Memory {
                rows: board
                    .rows()
                    .map(|row| {
                        row.iter()
                            .map(|cell| MemoryCellVm {
                                id: cell.id.value(),
                                face: cell.symbol.clone().unwrap_or_else(|| HIDDEN_CARD.to_string()),
                                revealed: cell.symbol.is_some(),
                            })
                            .collect()
                    })
                    .collect(),
                complete: board.is_complete,
            },
            Some(format!("Score: {}", board.score)),
        ),
        GameBoard::Puzzle(board) => (
            board.level.label(),
            "New Puzzle",
            BoardVm::Puzzle {
                snippets: board.snippets.clone(),
            },
            None,
        ),
        GameBoard::Math(board) => (
            board.level.label(),
            "New Game",
            BoardVm::Math {
                prompt: board.prompt.clone(),
            },
            Some(format!("Score: {}", board.score)),
        ),
    };

    GamesScreenVm {
        games,
        selected: snapshot.info.name(),
        title: format!("{} {}", snapshot.info.icon, snapshot.info.name()),
        description: snapshot.info.description,
        levels_line: format!("Available Levels: {}", levels.join(", ")),
        levels,
        level,
        restart_label,
        board,
        score_line,
        feedback: map_feedback(&snapshot.feedback),
    }
}

/// Event that restarts `game` at the level labelled `label`.
///
/// # Errors
///
/// Returns `ViewError::GameUnavailable` if the label is not a level of `game`.
pub fn level_event(game: GameKind, label: &str) -> Result<GameEvent, ViewError> {
    let event = match game {
        GameKind::MemoryMatch => label
            .parse::<MemoryLevel>()
            .map(|level| GameEvent::Memory(MemoryEvent::NewGame(level))),
        GameKind::CodePuzzle => label
            .parse::<PuzzleLevel>()
            .map(|level| GameEvent::Puzzle(PuzzleEvent::NewPuzzle(level))),
        GameKind::MathChallenge => label
            .parse::<MathLevel>()
            .map(|level| GameEvent::Math(MathEvent::NewGame(level))),
    };
    event.map_err(|err| {
        tracing::warn!(error = %err, "level change rejected");
        ViewError::GameUnavailable
    })
}

/// Games page state: one service per mounted view.
pub struct GamesVm {
    service: GameService,
}

impl GamesVm {
    #[must_use]
    pub fn new(service: GameService) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn selected(&self) -> GameKind {
        self.service.selected()
    }

    #[must_use]
    pub fn screen(&self) -> GamesScreenVm {
        map_games_screen(&self.service.snapshot(), self.service.catalog())
    }

    /// # Errors
    ///
    /// Returns `ViewError::GameUnavailable` when the service rejects the event.
    pub fn dispatch(&mut self, event: GameEvent) -> Result<(), ViewError> {
        self.service.handle(event).map(|_| ()).map_err(|err| {
            tracing::warn!(error = %err, "game event rejected");
            ViewError::GameUnavailable
        })
    }

    /// Restart the selected game at `label`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::GameUnavailable` for an unknown level label.
    pub fn change_level(&mut self, label: &str) -> Result<(), ViewError> {
        let event = level_event(self.selected(), label)?;
        self.dispatch(event)
    }
}

/// # Errors
///
/// Returns `ViewError::GameUnavailable` if the boards cannot be dealt.
pub fn start_games(ctx: &AppContext) -> Result<GamesVm, ViewError> {
    ctx.start_games().map(GamesVm::new).map_err(|err| {
        tracing::error!(error = %err, "games could not start");
        ViewError::GameUnavailable
    })
}
