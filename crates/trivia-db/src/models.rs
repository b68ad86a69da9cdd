use serde::{Deserialize, Serialize};

use crate::de::lenient_int;

/// Category model - groups questions by subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category identifier
    pub id: i64,
    /// Human readable name, e.g. "Science"
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Question model - a single trivia prompt with its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// Unique question identifier, assigned by the store
    pub id: i64,
    /// The prompt text
    pub question: String,
    /// The expected answer
    pub answer: String,
    /// Category ID this question belongs to (not checked against `categories`)
    pub category: i64,
    /// Difficulty rating, usually 1-5
    pub difficulty: i32,
}

/// Insert payload for a question; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient_int")]
    pub category: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attach the id assigned by the store.
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// One page of questions together with the number of records matching the query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: i64,
}

/// Selects which questions a paginated listing draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    /// Every question
    All,
    /// Questions whose `category` equals the given id
    Category(i64),
    /// Questions whose text contains the term, ignoring case
    Search(String),
}

impl QuestionFilter {
    /// Whether `question` is selected by this filter.
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => question.category == *id,
            Self::Search(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
        }
    }
}
