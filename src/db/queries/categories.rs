use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Category> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn upsert_category(pool: &SqlitePool, category: &Category) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO categories (id, type) VALUES (?1, ?2)
        ON CONFLICT(id) DO UPDATE SET type = excluded.type
        "#,
    )
    .bind(category.id)
    .bind(category.kind.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

// Questions reference categories, so an import only adds and renames, it
// never deletes rows that dropped out of the file.
pub async fn import_categories(
    pool: &SqlitePool,
    categories: Vec<Category>,
) -> anyhow::Result<()> {
    use itertools::Itertools;

    for category in categories.into_iter().sorted_by_key(|c| c.id) {
        upsert_category(pool, &category).await?;
    }
    Ok(())
}
