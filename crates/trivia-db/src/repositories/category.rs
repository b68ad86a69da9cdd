use sqlx::{Executor, Postgres};

use crate::models::Category;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Category>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, "type"
            FROM categories
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}
