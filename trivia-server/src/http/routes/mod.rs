//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use serde::Serialize;
use trivia_core::{paginate, Page, Question};

/// One page of questions plus the size of the whole selection
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl QuestionPage {
    pub fn new(selection: &[Question], page: Page) -> Self {
        Self {
            questions: paginate(selection, page),
            total_questions: selection.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
