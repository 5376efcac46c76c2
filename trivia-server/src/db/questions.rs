//! Postgres question store
//!
//! Every listing is `ORDER BY id`. Search escapes LIKE wildcards so the term
//! is matched as a literal, case-insensitive substring.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use trivia_core::{
    Category, CategoryId, NewQuestion, Question, QuestionId, QuestionStore, SearchTerm,
    StoreError, StoreResult,
};

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    difficulty: i32,
    category: i64,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            difficulty: row.difficulty,
            category: row.category,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    label: String,
}

fn into_questions(rows: Vec<QuestionRow>) -> Vec<Question> {
    rows.into_iter().map(Question::from).collect()
}

/// Question store backed by a connection pool
#[derive(Debug, Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn list_all(&self) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(into_questions(rows))
    }

    async fn list_by_category(&self, category: CategoryId) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(into_questions(rows))
    }

    async fn list_matching(&self, term: &SearchTerm) -> StoreResult<Vec<Question>> {
        let Some(escaped) = term.like_escaped() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escaped)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(into_questions(rows))
    }

    async fn find_by_id(&self, id: QuestionId) -> StoreResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(row.map(Question::from))
    }

    async fn insert(&self, question: &NewQuestion) -> StoreResult<QuestionId> {
        let result: Result<(i64,), sqlx::Error> = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.difficulty())
        .bind(question.category())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok((id,)) => Ok(id),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(StoreError::UnknownCategory {
                    id: question.category(),
                })
            }
            Err(e) => Err(StoreError::backend(e)),
        }
    }

    async fn delete_by_id(&self, id: QuestionId) -> StoreResult<()> {
        let deleted: Option<(i64,)> =
            sqlx::query_as("DELETE FROM questions WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::backend)?;

        deleted.map(|_| ()).ok_or(StoreError::NotFound { id })
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        Ok(rows
            .into_iter()
            .map(|row| Category::new(row.id, row.label))
            .collect())
    }
}
