//! Read-only content tables, built once at startup and shared by every session.

mod games;
mod quiz;

pub use games::{CodePuzzle, GameCatalog, GameInfo, GameKind, MEMORY_SYMBOLS, code_puzzle};
pub use quiz::{CatalogError, QuizCatalog, Subject};
