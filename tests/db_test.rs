//! PostgreSQL repository tests. Each test is skipped unless `TEST_DATABASE_URL` is set.

mod common;

use common::{create_test_db, new_question};
use trivia_api::db::{CategoryFilter, Repository};

macro_rules! test_db {
    () => {
        match create_test_db().await {
            Some(db) => db,
            None => {
                eprintln!("TEST_DATABASE_URL not set, skipping");
                return;
            }
        }
    };
}

#[tokio::test]
async fn test_migrations_applied() {
    let db = test_db!();
    assert!(db.migration_applied("V1").await.unwrap());
    assert!(db.migration_applied("V2").await.unwrap());
}

#[tokio::test]
async fn test_default_categories_seeded() {
    let db = test_db!();
    let categories = db.categories().await.unwrap();

    let science = categories.iter().find(|c| c.id == 1).unwrap();
    assert_eq!(science.label, "Science");
    assert!(categories.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_question_crud() {
    let db = test_db!();

    let id = db
        .insert_question(&new_question("Which metal is liquid at room temperature?", 2, 1))
        .await
        .unwrap();

    let stored = db.question(id).await.unwrap().unwrap();
    assert_eq!(stored.category, 1);
    assert_eq!(stored.difficulty, 2);

    assert!(db
        .questions_in_category(1)
        .await
        .unwrap()
        .iter()
        .any(|q| q.id == id));

    assert!(db.delete_question(id).await.unwrap());
    assert!(db.question(id).await.unwrap().is_none());
    assert!(!db.delete_question(id).await.unwrap());
}

#[tokio::test]
async fn test_insert_into_unknown_category_fails() {
    let db = test_db!();
    assert!(db
        .insert_question(&new_question("orphan", 1, 99_999))
        .await
        .is_err());
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_literal() {
    let db = test_db!();
    let underscore = db
        .insert_question(&new_question("Is 100% of the ZEBRA_STRIPE pattern unique?", 3, 1))
        .await
        .unwrap();
    let dash = db
        .insert_question(&new_question("Is the ZEBRA-STRIPE pattern striped?", 3, 1))
        .await
        .unwrap();

    let found = db.search_questions("zebra_stripe").await.unwrap();
    assert!(found.iter().any(|q| q.id == underscore));
    // `_` must not act as a wildcard
    assert!(!found.iter().any(|q| q.id == dash));

    let percent = db.search_questions("100%").await.unwrap();
    assert!(percent.iter().any(|q| q.id == underscore));
    assert!(!percent.iter().any(|q| q.id == dash));

    db.delete_question(underscore).await.unwrap();
    db.delete_question(dash).await.unwrap();
}

#[tokio::test]
async fn test_quiz_pool_excludes_previous() {
    let db = test_db!();
    let a = db.insert_question(&new_question("pool a", 1, 6)).await.unwrap();
    let b = db.insert_question(&new_question("pool b", 1, 6)).await.unwrap();

    let pool = db.quiz_pool(CategoryFilter::Only(6), &[a]).await.unwrap();
    assert!(pool.iter().any(|q| q.id == b));
    assert!(pool.iter().all(|q| q.id != a && q.category == 6));

    let pool = db.quiz_pool(CategoryFilter::All, &[a, b]).await.unwrap();
    assert!(pool.iter().all(|q| q.id != a && q.id != b));

    db.delete_question(a).await.unwrap();
    db.delete_question(b).await.unwrap();
}
