//! In-memory data store gateway
//!
//! Ordered maps behind a tokio `RwLock`. Ids come from a monotonic counter
//! and are never handed out twice, even after deletes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::filter::{by_category, SearchTerm};
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::seed;
use crate::store::QuestionStore;

#[derive(Debug, Default)]
struct Inner {
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
    last_id: QuestionId,
}

impl Inner {
    fn collect(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.questions.values().filter(|q| keep(q)).cloned().collect()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Empty store with the given categories
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories = categories.into_iter().map(|c| (c.id, c)).collect();
        Self {
            inner: RwLock::new(Inner {
                categories,
                ..Inner::default()
            }),
        }
    }

    /// Store preloaded with the reference dataset
    pub fn seeded() -> Self {
        Self::with_questions(seed::categories(), seed::questions())
    }

    /// Store preloaded with explicit rows; ids are kept as given.
    pub fn with_questions(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let mut store = Self::new(categories);
        {
            let inner = store.inner.get_mut();
            for q in questions {
                inner.last_id = inner.last_id.max(q.id);
                inner.questions.insert(q.id, q);
            }
        }
        store
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<Question>> {
        Ok(self.inner.read().await.collect(|_| true))
    }

    async fn list_by_category(&self, category: CategoryId) -> StoreResult<Vec<Question>> {
        Ok(self.inner.read().await.collect(by_category(category)))
    }

    async fn list_matching(&self, term: &SearchTerm) -> StoreResult<Vec<Question>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.inner.read().await.collect(|q| term.matches(q)))
    }

    async fn find_by_id(&self, id: QuestionId) -> StoreResult<Option<Question>> {
        Ok(self.inner.read().await.questions.get(&id).cloned())
    }

    async fn insert(&self, question: &NewQuestion) -> StoreResult<QuestionId> {
        let mut inner = self.inner.write().await;
        if !inner.categories.contains_key(&question.category()) {
            return Err(StoreError::UnknownCategory {
                id: question.category(),
            });
        }

        inner.last_id += 1;
        let id = inner.last_id;
        inner.questions.insert(id, question.clone().into_question(id));
        Ok(id)
    }

    async fn delete_by_id(&self, id: QuestionId) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question() -> NewQuestion {
        NewQuestion::new(
            "What director, based on a book, the real world is called Oasis?",
            "Steven Spielberg",
            5,
            4,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn lists_are_ordered_by_id() {
        let store = MemoryStore::seeded();
        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 19);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let store = MemoryStore::seeded();
        let id = store.insert(&new_question()).await.unwrap();
        assert_eq!(id, 24);

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, new_question().into_question(id));
        assert_eq!(store.list_all().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn delete_then_find_is_absent() {
        let store = MemoryStore::seeded();
        store.delete_by_id(9).await.unwrap();
        assert!(store.find_by_id(9).await.unwrap().is_none());

        let err = store.delete_by_id(9).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let store = MemoryStore::seeded();
        let first = store.insert(&new_question()).await.unwrap();
        store.delete_by_id(first).await.unwrap();
        let second = store.insert(&new_question()).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn insert_rejects_unknown_category() {
        let store = MemoryStore::seeded();
        let orphan = NewQuestion::new("q", "a", 99, 1).unwrap();
        let err = store.insert(&orphan).await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownCategory { id: 99 }));
    }

    #[tokio::test]
    async fn search_and_category_listing() {
        let store = MemoryStore::seeded();
        let hits = store.list_matching(&SearchTerm::from("movie")).await.unwrap();
        assert_eq!(hits.iter().map(|q| q.id).collect::<Vec<_>>(), vec![2]);

        assert!(store.list_matching(&SearchTerm::new(None)).await.unwrap().is_empty());
        assert!(store.list_by_category(1000).await.unwrap().is_empty());
        assert_eq!(store.list_by_category(1).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn categories_are_ordered() {
        let store = MemoryStore::seeded();
        let labels: Vec<_> = store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(
            labels,
            ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        );
    }
}
