use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::model::QuestionRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question bank has no subjects")]
    Empty,

    #[error("subject name cannot be empty")]
    EmptySubjectName,

    #[error("duplicate subject: {0}")]
    DuplicateSubject(String),

    #[error("subject {0} has no questions")]
    NoQuestions(String),
}

/// A named, ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    questions: Arc<[QuestionRecord]>,
}

impl Subject {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &Arc<[QuestionRecord]> {
        &self.questions
    }
}

/// Question bank keyed by subject, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCatalog {
    subjects: Vec<Subject>,
}

impl QuizCatalog {
    /// Build a catalog from subjects in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if there are no subjects, a name is blank or
    /// repeated, or a subject has no questions.
    pub fn new(
        subjects: impl IntoIterator<Item = (String, Vec<QuestionRecord>)>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut built = Vec::new();

        for (name, questions) in subjects {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CatalogError::EmptySubjectName);
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateSubject(name));
            }
            if questions.is_empty() {
                return Err(CatalogError::NoQuestions(name));
            }
            built.push(Subject {
                name,
                questions: questions.into(),
            });
        }

        if built.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { subjects: built })
    }

    /// The question bank that ships with the app.
    #[must_use]
    pub fn builtin() -> Self {
        let subject = |name: &str, questions: Vec<QuestionRecord>| Subject {
            name: name.to_string(),
            questions: questions.into(),
        };

        Self {
            subjects: vec![
                subject(
                    "AI & Machine Learning",
                    vec![
                        QuestionRecord::from_static(
                            "What is the main goal of supervised learning?",
                            &[
                                "To learn from labeled data and make predictions",
                                "To cluster data without labels",
                                "To learn through trial and error",
                                "To generate new data samples",
                            ],
                            0,
                        ),
                        QuestionRecord::from_static(
                            "Which of these is NOT a type of machine learning?",
                            &[
                                "Supervised Learning",
                                "Reinforcement Learning",
                                "Cognitive Learning",
                                "Unsupervised Learning",
                            ],
                            2,
                        ),
                    ],
                ),
                subject(
                    "Programming",
                    vec![
                        QuestionRecord::from_static(
                            "What is a variable in programming?",
                            &[
                                "A fixed value that never changes",
                                "A container for storing data values",
                                "A type of loop",
                                "A mathematical equation",
                            ],
                            1,
                        ),
                        QuestionRecord::from_static(
                            "Which data structure uses LIFO (Last In, First Out)?",
                            &["Queue", "Stack", "Array", "Linked List"],
                            1,
                        ),
                    ],
                ),
                subject(
                    "Science",
                    vec![
                        QuestionRecord::from_static(
                            "What is the process by which plants convert light energy into chemical energy?",
                            &["Photosynthesis", "Respiration", "Fermentation", "Oxidation"],
                            0,
                        ),
                        QuestionRecord::from_static(
                            "Which of these is NOT a state of matter?",
                            &["Solid", "Liquid", "Energy", "Gas"],
                            2,
                        ),
                    ],
                ),
            ],
        }
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    pub fn subject_names(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(Subject::name)
    }

    /// First subject in display order.
    #[must_use]
    pub fn first_subject(&self) -> &str {
        // `new` and `builtin` never produce an empty catalog.
        self.subjects.first().map_or("", Subject::name)
    }

    #[must_use]
    pub fn contains(&self, subject: &str) -> bool {
        self.questions(subject).is_some()
    }

    #[must_use]
    pub fn questions(&self, subject: &str) -> Option<&Arc<[QuestionRecord]>> {
        self.subjects
            .iter()
            .find(|candidate| candidate.name == subject)
            .map(Subject::questions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
