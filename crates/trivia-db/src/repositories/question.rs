use sqlx::{Executor, Postgres};

use crate::models::{NewQuestion, Question, QuestionFilter};

/// Bind values shared by the filtered queries: `$1` category, `$2` ILIKE pattern.
fn filter_binds(filter: &QuestionFilter) -> (Option<i64>, Option<String>) {
    match filter {
        QuestionFilter::All => (None, None),
        QuestionFilter::Category(id) => (Some(*id), None),
        QuestionFilter::Search(term) => (None, Some(format!("%{}%", escape_like(term)))),
    }
}

/// Escape LIKE wildcards so the term is matched literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn list_page<'e, E>(
    executor: E,
    filter: &QuestionFilter,
    offset: i64,
    limit: i64,
) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (category, pattern) = filter_binds(filter);

    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::bigint IS NULL OR category = $1)
                AND ($2::text IS NULL OR question ILIKE $2 ESCAPE '\')
            ORDER BY id
            LIMIT $3 OFFSET $4
        "#,
    )
    .bind(category)
    .bind(pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn count<'e, E>(executor: E, filter: &QuestionFilter) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let (category, pattern) = filter_binds(filter);

    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*)
            FROM questions
            WHERE ($1::bigint IS NULL OR category = $1)
                AND ($2::text IS NULL OR question ILIKE $2 ESCAPE '\')
        "#,
    )
    .bind(category)
    .bind(pattern)
    .fetch_one(executor)
    .await
}

pub async fn list_for_quiz<'e, E>(
    executor: E,
    category: Option<i64>,
) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::bigint IS NULL OR category = $1)
            ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(executor)
    .await
}

pub async fn insert<'e, E>(executor: E, new_question: &NewQuestion) -> Result<Question, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
        "#,
    )
    .bind(&new_question.question)
    .bind(&new_question.answer)
    .bind(new_question.category)
    .bind(new_question.difficulty)
    .fetch_one(executor)
    .await
}

/// Returns `true` when a row was removed.
pub async fn delete<'e, E>(executor: E, question_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM questions
            WHERE id = $1
        "#,
    )
    .bind(question_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
