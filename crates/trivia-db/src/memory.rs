//! In-process store for tests and database-less local runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    models::{Category, NewQuestion, Question, QuestionFilter, QuestionPage},
    store::TriviaStore,
};

/// Store keeping categories and questions in memory.
///
/// Ids are assigned from a counter starting at 1 and are never reused, matching
/// a `BIGSERIAL` column.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_categories(Vec::new())
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut categories: Vec<Category> = categories.into_iter().collect();
        categories.sort_by_key(|c| c.id);

        Self {
            inner: RwLock::new(Inner {
                categories,
                questions: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// The six categories the database migration seeds.
    pub fn with_default_categories() -> Self {
        Self::with_categories([
            Category::new(1, "Science"),
            Category::new(2, "Art"),
            Category::new(3, "Geography"),
            Category::new(4, "History"),
            Category::new(5, "Entertainment"),
            Category::new(6, "Sports"),
        ])
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        Ok(self.inner.read().await.categories.clone())
    }

    async fn page_questions(
        &self,
        filter: &QuestionFilter,
        offset: i64,
        limit: i64,
    ) -> Result<QuestionPage, sqlx::Error> {
        let inner = self.inner.read().await;
        let matching: Vec<&Question> = inner
            .questions
            .iter()
            .filter(|q| filter.matches(q))
            .collect();

        let questions = matching
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|q| (*q).clone())
            .collect();

        Ok(QuestionPage {
            questions,
            total: matching.len() as i64,
        })
    }

    async fn insert_question(&self, new_question: NewQuestion) -> Result<Question, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let question = new_question.with_id(inner.next_id);
        inner.next_id += 1;
        inner.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, question_id: i64) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let before = inner.questions.len();
        inner.questions.retain(|q| q.id != question_id);
        Ok(inner.questions.len() < before)
    }

    async fn quiz_pool(&self, category: Option<i64>) -> Result<Vec<Question>, sqlx::Error> {
        let filter = category.map_or(QuestionFilter::All, QuestionFilter::Category);
        let inner = self.inner.read().await;
        Ok(inner
            .questions
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }
}
