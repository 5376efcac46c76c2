//! Quiz question selection
//!
//! Picks one question the player has not seen yet, optionally confined to a
//! single category. Randomness comes from an injected `RandomSource` so
//! tests can seed it.

use std::collections::HashSet;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::StoreResult;
use crate::filter::CategorySelector;
use crate::model::{Question, QuestionId};
use crate::store::QuestionStore;

/// Uniform index source
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local PRNG, the production default
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible PRNG seeded from a fixed value
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// One quiz step: what has been shown and where to draw from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRequest {
    pub previous: HashSet<QuestionId>,
    pub category: CategorySelector,
}

impl QuizRequest {
    pub fn new(previous: impl IntoIterator<Item = QuestionId>, category: CategorySelector) -> Self {
        Self {
            previous: previous.into_iter().collect(),
            category,
        }
    }
}

/// Drop already-shown questions and pick one of the rest uniformly.
///
/// Returns `None` when nothing is left; that is a normal end of quiz, not an
/// error.
pub fn choose(
    mut candidates: Vec<Question>,
    previous: &HashSet<QuestionId>,
    random: &dyn RandomSource,
) -> Option<Question> {
    if !previous.is_empty() {
        candidates.retain(|q| !previous.contains(&q.id));
    }
    if candidates.is_empty() {
        return None;
    }
    let index = random.pick(candidates.len());
    Some(candidates.swap_remove(index))
}

/// Store-backed quiz selector
pub struct QuizSelector<'a> {
    store: &'a dyn QuestionStore,
    random: &'a dyn RandomSource,
}

impl<'a> QuizSelector<'a> {
    pub fn new(store: &'a dyn QuestionStore, random: &'a dyn RandomSource) -> Self {
        Self { store, random }
    }

    /// Next unseen question for this request, or `None` when exhausted.
    pub async fn next_question(&self, request: &QuizRequest) -> StoreResult<Option<Question>> {
        let candidates = match request.category {
            CategorySelector::Only(id) => self.store.list_by_category(id).await?,
            CategorySelector::All => self.store.list_all().await?,
        };
        let total = candidates.len();
        let picked = choose(candidates, &request.previous, self.random);

        tracing::debug!(
            category = ?request.category,
            candidates = total,
            excluded = request.previous.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "quiz selection"
        );

        Ok(picked)
    }
}
