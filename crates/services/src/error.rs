//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use elara_core::catalog::CatalogError;
use elara_core::model::{MathError, MemoryError, QuestionError, QuizError};

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted by `GameService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameServiceError {
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Errors emitted while loading a question bank file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("subject {subject:?}, question {index}: {source}")]
    Question {
        subject: String,
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
