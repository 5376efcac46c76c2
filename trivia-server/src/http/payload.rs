//! Request bodies
//!
//! Numeric fields accept JSON integers or numeric strings, since clients
//! send both. Anything else fails validation with a 422, not a 400.

use serde::Deserialize;
use trivia_core::{CategorySelector, NewQuestion, QuestionId, QuizRequest, SearchTerm, ValidationError};

/// Integer that may arrive as a number or a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl LooseInt {
    pub fn to_i64(&self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ValidationError::NotAnInteger { field }),
            Self::Other(_) => Err(ValidationError::NotAnInteger { field }),
        }
    }
}

/// Read an optional loose integer, falling back to `default` when absent
fn int_or(value: Option<&LooseInt>, field: &'static str, default: i64) -> Result<i64, ValidationError> {
    value.map_or(Ok(default), |v| v.to_i64(field))
}

/// POST /questions
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionBody {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<LooseInt>,
    pub difficulty: Option<LooseInt>,
}

impl CreateQuestionBody {
    /// `category` and `difficulty` default to 1 when omitted
    pub fn into_new_question(self) -> Result<NewQuestion, ValidationError> {
        let category = int_or(self.category.as_ref(), "category", 1)?;
        let difficulty = int_or(self.difficulty.as_ref(), "difficulty", 1)?;
        let difficulty = i32::try_from(difficulty).map_err(|_| ValidationError::OutOfRange {
            field: "difficulty",
            value: difficulty,
        })?;

        NewQuestion::new(
            self.question.unwrap_or_default(),
            self.answer.unwrap_or_default(),
            category,
            difficulty,
        )
    }
}

/// POST /questions/search
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchBody {
    pub fn term(self) -> SearchTerm {
        SearchTerm::new(self.search_term)
    }
}

/// `quiz_category` object; only `id` drives selection
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    pub id: Option<LooseInt>,
    #[serde(rename = "type")]
    pub label: Option<String>,
}

/// POST /quizzes
#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    pub previous_questions: Option<Vec<LooseInt>>,
    pub quiz_category: Option<QuizCategory>,
}

impl QuizBody {
    /// Missing category or id means "all categories"
    pub fn into_request(self) -> Result<QuizRequest, ValidationError> {
        let previous = self
            .previous_questions
            .unwrap_or_default()
            .iter()
            .map(|id| id.to_i64("previous_questions"))
            .collect::<Result<Vec<QuestionId>, _>>()?;

        let category_id = match &self.quiz_category {
            Some(category) => int_or(category.id.as_ref(), "quiz_category.id", 0)?,
            None => 0,
        };

        Ok(QuizRequest::new(previous, CategorySelector::from_id(category_id)))
    }
}
