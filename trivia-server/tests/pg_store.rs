//! Postgres gateway tests
//!
//! Run with: DATABASE_URL=postgres://localhost/trivia_test cargo test -p trivia-server -- --ignored
//! Each test resets and reseeds the database, so run them with --test-threads=1.

use sqlx::PgPool;
use trivia_core::{NewQuestion, QuestionStore, SearchTerm, StoreError};
use trivia_server::db::{create_pool, migrations, seed, PgQuestionStore};

async fn fresh_store() -> PgQuestionStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool: PgPool = create_pool(&url).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    seed::reset(&pool).await.expect("reset failed");
    seed::run(&pool).await.expect("seed failed");
    PgQuestionStore::new(pool)
}

#[tokio::test]
#[ignore = "requires database"]
async fn seeded_listing_is_ordered() {
    let store = fresh_store().await;
    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 19);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(store.list_categories().await.unwrap().len(), 6);
}

#[tokio::test]
#[ignore = "requires database"]
async fn search_is_case_insensitive_and_literal() {
    let store = fresh_store().await;
    let lower = store.list_matching(&SearchTerm::from("movie")).await.unwrap();
    let upper = store.list_matching(&SearchTerm::from("MOVIE")).await.unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert!(store.list_matching(&SearchTerm::from("%")).await.unwrap().is_empty());
    assert!(store.list_matching(&SearchTerm::new(None)).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn insert_find_delete() {
    let store = fresh_store().await;
    let new_question = NewQuestion::new("Who painted the Night Watch?", "Rembrandt", 2, 3).unwrap();

    let id = store.insert(&new_question).await.unwrap();
    assert!(id > 23, "seeded ids must not be reused");
    assert_eq!(
        store.find_by_id(id).await.unwrap(),
        Some(new_question.clone().into_question(id))
    );

    store.delete_by_id(id).await.unwrap();
    assert!(store.find_by_id(id).await.unwrap().is_none());
    assert!(matches!(
        store.delete_by_id(id).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
#[ignore = "requires database"]
async fn insert_with_unknown_category_fails() {
    let store = fresh_store().await;
    let orphan = NewQuestion::new("q", "a", 999, 1).unwrap();
    assert!(matches!(
        store.insert(&orphan).await,
        Err(StoreError::UnknownCategory { id: 999 })
    ));
}

#[tokio::test]
#[ignore = "requires database"]
async fn category_listing() {
    let store = fresh_store().await;
    let sports: Vec<_> = store
        .list_by_category(6)
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(sports, vec![10, 11]);
    assert!(store.list_by_category(1000).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn reseeding_keeps_deleted_ids_deleted() {
    let store = fresh_store().await;
    store.delete_by_id(2).await.unwrap();

    seed::run(store.pool()).await.expect("second seed failed");

    assert!(store.find_by_id(2).await.unwrap().is_none());
    assert_eq!(store.list_all().await.unwrap().len(), 18);
    assert_eq!(store.list_categories().await.unwrap().len(), 6);
}
