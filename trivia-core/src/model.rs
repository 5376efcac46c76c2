//! Domain models with validation at construction
//!
//! `Question` and `Category` are the shapes returned by the store and
//! serialized to clients. `NewQuestion` is the only way to build an insert,
//! so invalid input is rejected before it reaches a backend.

use std::fmt;

use serde::{Deserialize, Serialize};

pub type QuestionId = i64;
pub type CategoryId = i64;

/// A stored trivia question.
///
/// Serializes to exactly five keys: `id`, `question`, `answer`,
/// `difficulty`, `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

/// A question grouping. Categories are seeded externally and read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub label: String,
}

impl Category {
    pub fn new(id: CategoryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Validated question fields, ready for insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate and build an insert.
    ///
    /// # Rules
    /// - question and answer must contain non-whitespace text
    /// - category must be a positive id
    /// - difficulty must be at least 1
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }
        if answer.trim().is_empty() {
            return Err(ValidationError::Empty { field: "answer" });
        }
        if category < 1 {
            return Err(ValidationError::OutOfRange {
                field: "category",
                value: category,
            });
        }
        if difficulty < 1 {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                value: i64::from(difficulty),
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach a store-assigned id
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

/// Validation error for question fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or blank
    Empty { field: &'static str },

    /// Numeric field below its minimum
    OutOfRange { field: &'static str, value: i64 },

    /// Field could not be read as an integer
    NotAnInteger { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::OutOfRange { field, value } => {
                write!(f, "{} must be a positive integer, got {}", field, value)
            }
            Self::NotAnInteger { field } => write!(f, "{} must be an integer", field),
        }
    }
}

impl std::error::Error for ValidationError {}
