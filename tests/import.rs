use crate::common::{seed_questions, spawn_app};
use trivia_api::db::queries::categories::{get_all_categories, import_categories};
use trivia_api::db::queries::questions::{get_all_questions, import_questions};
use trivia_api::db::{Category, Question};

mod common;

fn question(id: i64, category: i64) -> Question {
    Question {
        id,
        question: format!("imported question {id}"),
        answer: format!("imported answer {id}"),
        category,
        difficulty: 2,
    }
}

#[tokio::test]
async fn importing_questions_replaces_the_table() {
    let app = spawn_app().await;
    seed_questions(&app, 2, 1).await;

    let imported = vec![question(11, 2), question(12, 3), question(10, 1)];
    import_questions(&app.db_pool, imported)
        .await
        .expect("Failed to import questions");

    let questions = get_all_questions(&app.db_pool).await.unwrap();
    let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
}

#[tokio::test]
async fn importing_categories_upserts_and_never_deletes() {
    let app = spawn_app().await;

    let imported = vec![
        Category {
            id: 1,
            kind: "Natural Science".to_owned(),
        },
        Category {
            id: 7,
            kind: "Music".to_owned(),
        },
    ];
    import_categories(&app.db_pool, imported)
        .await
        .expect("Failed to import categories");

    let categories = get_all_categories(&app.db_pool).await.unwrap();
    assert_eq!(categories.len(), 7);
    assert_eq!(categories[0].kind, "Natural Science");
    assert_eq!(categories[6].kind, "Music");
}

#[tokio::test]
async fn orphan_question_imports_are_rejected_and_leave_the_table_alone() {
    let app = spawn_app().await;
    let seeded = seed_questions(&app, 2, 1).await;

    // id 10 is fine, id 11 points at a category that does not exist
    let imported = vec![question(10, 1), question(11, 99)];
    assert!(import_questions(&app.db_pool, imported).await.is_err());

    let questions = get_all_questions(&app.db_pool).await.unwrap();
    let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, seeded);
}
