//! Load the reference dataset into Postgres

use sqlx::{PgPool, Postgres, Transaction};
use trivia_core::seed::{CATEGORIES, QUESTIONS};

use crate::Result;

/// Insert reference categories and questions, keeping their ids.
///
/// Categories already present are left alone. Questions are only loaded
/// while the question id sequence is untouched (a fresh or reset database),
/// so a deleted seed question is never brought back under its old id.
pub async fn run(pool: &PgPool) -> Result<()> {
    let mut tx = pool.begin().await?;

    for &(id, label) in CATEGORIES {
        sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(label)
            .execute(&mut *tx)
            .await?;
    }
    advance_sequence(&mut tx, "categories").await?;

    let (ids_issued,): (bool,) = sqlx::query_as("SELECT is_called FROM questions_id_seq")
        .fetch_one(&mut *tx)
        .await?;

    if ids_issued {
        tracing::info!("Question ids already issued, skipping seed questions");
    } else {
        for &(id, question, answer, difficulty, category) in QUESTIONS {
            sqlx::query(
                r#"
                INSERT INTO questions (id, question, answer, difficulty, category)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(id)
            .bind(question)
            .bind(answer)
            .bind(difficulty)
            .bind(category)
            .execute(&mut *tx)
            .await?;
        }
        advance_sequence(&mut tx, "questions").await?;
        tracing::info!(questions = QUESTIONS.len(), "Seed questions loaded");
    }

    tx.commit().await?;
    tracing::info!(categories = CATEGORIES.len(), "Seed data loaded");
    Ok(())
}

/// Move `table`'s id sequence to its highest id. Marks the sequence as
/// called, which later seed runs rely on.
async fn advance_sequence(tx: &mut Transaction<'_, Postgres>, table: &str) -> Result<()> {
    let sql = format!(
        "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
         (SELECT COALESCE(MAX(id), 1) FROM {table}))"
    );
    sqlx::query(&sql).execute(&mut **tx).await?;
    Ok(())
}

/// Drop all rows and restart id sequences
pub async fn reset(pool: &PgPool) -> Result<()> {
    sqlx::query("TRUNCATE questions, categories RESTART IDENTITY CASCADE")
        .execute(pool)
        .await?;
    tracing::warn!("All trivia rows deleted");
    Ok(())
}
