//! The persistence seam used by the HTTP layer.
//!
//! Handlers only ever talk to a [`TriviaStore`]; the server binary injects a
//! [`PgStore`] and tests inject a [`MemoryStore`](crate::MemoryStore).

use async_trait::async_trait;
use sqlx::PgPool;

pub use crate::models::QuestionFilter;
use crate::{
    models::{Category, NewQuestion, Question, QuestionPage},
    repositories::{category, question},
};

/// Read/write access to categories and questions.
#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error>;

    /// The `[offset, offset + limit)` slice of the id-ordered questions selected
    /// by `filter`, together with the total number of matches.
    async fn page_questions(
        &self,
        filter: &QuestionFilter,
        offset: i64,
        limit: i64,
    ) -> Result<QuestionPage, sqlx::Error>;

    /// Persist a new question and return it with its assigned id.
    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, sqlx::Error>;

    /// Remove a question. Returns `false` when no question had that id.
    async fn delete_question(&self, question_id: i64) -> Result<bool, sqlx::Error>;

    /// Candidate questions for a quiz round: every question when `category` is
    /// `None`, otherwise only that category's. Ordered by id.
    async fn quiz_pool(&self, category: Option<i64>) -> Result<Vec<Question>, sqlx::Error>;
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        category::list_all(&self.pool).await
    }

    async fn page_questions(
        &self,
        filter: &QuestionFilter,
        offset: i64,
        limit: i64,
    ) -> Result<QuestionPage, sqlx::Error> {
        let total = question::count(&self.pool, filter).await?;
        let questions = if offset < total {
            let pool = &self.pool;
            question::list_page(pool, filter, offset, limit).await?
        } else {
            Vec::new()
        };

        Ok(QuestionPage { questions, total })
    }

    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, sqlx::Error> {
        question::insert(&self.pool, &new_question).await
    }

    async fn delete_question(&self, question_id: i64) -> Result<bool, sqlx::Error> {
        question::delete(&self.pool, question_id).await
    }

    async fn quiz_pool(&self, category: Option<i64>) -> Result<Vec<Question>, sqlx::Error> {
        question::list_for_quiz(&self.pool, category).await
    }
}
