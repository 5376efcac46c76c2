//! Application state shared across handlers

use std::sync::Arc;

use trivia_core::{QuestionStore, RandomSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn QuestionStore>,
    random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, random }),
        }
    }

    pub fn store(&self) -> &dyn QuestionStore {
        self.inner.store.as_ref()
    }

    pub fn random(&self) -> &dyn RandomSource {
        self.inner.random.as_ref()
    }
}
