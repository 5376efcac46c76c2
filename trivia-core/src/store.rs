//! Data store gateway contract
//!
//! Each list operation returns a fresh, independent `Vec` ordered by question
//! id; callers filter and paginate it without touching store state.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::filter::SearchTerm;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Every question, ascending by id
    async fn list_all(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose category equals `category`, ascending by id
    async fn list_by_category(&self, category: CategoryId) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term` (case-insensitive), ascending by id
    async fn list_matching(&self, term: &SearchTerm) -> StoreResult<Vec<Question>>;

    async fn find_by_id(&self, id: QuestionId) -> StoreResult<Option<Question>>;

    /// Insert and return the newly assigned id
    async fn insert(&self, question: &NewQuestion) -> StoreResult<QuestionId>;

    /// Remove a question; `StoreError::NotFound` if it does not exist
    async fn delete_by_id(&self, id: QuestionId) -> StoreResult<()>;

    /// All categories, ascending by id
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;
}
