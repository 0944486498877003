mod service;
mod snapshot;

// Public API of the games subsystem.
pub use crate::error::GameServiceError;
pub use service::{GameEvent, GameService, GameSettings, MathEvent, MemoryEvent, PuzzleEvent};
pub use snapshot::{GameBoard, GameSnapshot, MathBoard, MemoryBoard, MemoryCell, PuzzleBoard};
