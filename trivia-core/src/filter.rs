//! Question predicates: substring search and category restriction
//!
//! The Postgres gateway expresses the same predicates in SQL; the in-memory
//! gateway and the quiz selector evaluate them directly.

use crate::model::{CategoryId, Question};

/// Case-insensitive substring search over question text.
///
/// An absent or empty term matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(Option<String>);

impl SearchTerm {
    pub fn new(raw: Option<String>) -> Self {
        Self(raw.filter(|s| !s.is_empty()))
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// True when no row can ever match
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn matches(&self, question: &Question) -> bool {
        match &self.0 {
            Some(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => false,
        }
    }

    /// Term with LIKE wildcards escaped (`\` is the escape character), so it
    /// is matched literally inside `'%' || $1 || '%'`.
    pub fn like_escaped(&self) -> Option<String> {
        self.0.as_deref().map(|term| {
            let mut escaped = String::with_capacity(term.len());
            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped
        })
    }
}

impl From<&str> for SearchTerm {
    fn from(s: &str) -> Self {
        Self::new(Some(s.to_owned()))
    }
}

/// Exact category match
pub fn by_category(category: CategoryId) -> impl Fn(&Question) -> bool {
    move |q| q.category == category
}

/// Category restriction for the quiz flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    /// Draw from every category
    All,
    /// Draw only from this category
    Only(CategoryId),
}

impl CategorySelector {
    /// Any id of 0 or below means "all categories".
    pub fn from_id(id: i64) -> Self {
        if id > 0 {
            Self::Only(id)
        } else {
            Self::All
        }
    }

    pub fn allows(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => question.category == *id,
        }
    }
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self::All
    }
}
