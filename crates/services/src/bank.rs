//! Loading quiz catalogs from question-bank JSON files.
//!
//! ```json
//! { "subjects": [ { "name": "Programming",
//!     "questions": [ { "question": "...", "options": ["a", "b"], "correct": 1 } ] } ] }
//! ```

use std::path::Path;

use serde::Deserialize;

use elara_core::catalog::QuizCatalog;
use elara_core::model::QuestionRecord;

use crate::error::BankError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BankFile {
    subjects: Vec<SubjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SubjectEntry {
    name: String,
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionEntry {
    question: String,
    options: Vec<String>,
    correct: usize,
}

/// Parse and validate a question bank.
///
/// # Errors
///
/// Returns `BankError::Json` for malformed JSON, `BankError::Question` for an
/// invalid question, and `BankError::Catalog` for an empty bank, duplicate
/// subjects, or subjects without questions.
pub fn parse_question_bank(json: &str) -> Result<QuizCatalog, BankError> {
    let file: BankFile = serde_json::from_str(json)?;

    let mut subjects = Vec::with_capacity(file.subjects.len());
    for subject in file.subjects {
        let questions = subject
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                QuestionRecord::new(entry.question, entry.options, entry.correct).map_err(
                    |source| BankError::Question {
                        subject: subject.name.clone(),
                        index,
                        source,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        subjects.push((subject.name, questions));
    }

    Ok(QuizCatalog::new(subjects)?)
}

/// Read a question bank from disk.
///
/// # Errors
///
/// Returns `BankError::Io` if the file cannot be read, otherwise the errors of
/// [`parse_question_bank`].
pub fn load_question_bank(path: &Path) -> Result<QuizCatalog, BankError> {
    let json = std::fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_question_bank(&json)?;
    tracing::info!(path = %path.display(), subjects = catalog.len(), "question bank loaded");
    Ok(catalog)
}
