use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use trivia_db::{de::LenientInt, models::Question};

use crate::error::ApiError;

/// Category id that selects questions from every category
pub const ALL_CATEGORIES: i64 = 0;

/// Body of `POST /quizzes`
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown; entries that are not integers never match a question
    #[serde(default, deserialize_with = "integer_entries")]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The category picked by the player; clients also send its `type`
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<LenientInt>,
}

fn integer_entries<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries.iter().filter_map(Value::as_i64).collect())
}

impl QuizRequest {
    /// The requested category id, accepting JSON integers and numeric strings.
    pub fn category_id(&self) -> Result<i64, ApiError> {
        let id = self
            .quiz_category
            .as_ref()
            .and_then(|c| c.id.as_ref())
            .ok_or_else(|| ApiError::Unprocessable("quiz_category.id is missing".to_string()))?;

        id.as_i64()
            .ok_or_else(|| ApiError::Unprocessable(format!("invalid quiz category id: {id:?}")))
    }

    /// `None` when the quiz spans all categories.
    pub fn category_scope(&self) -> Result<Option<i64>, ApiError> {
        let id = self.category_id()?;
        Ok((id != ALL_CATEGORIES).then_some(id))
    }
}

/// Response of `POST /quizzes`; `question` is `false` once the pool is exhausted
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(serialize_with = "question_or_false")]
    pub question: Option<Question>,
}

fn question_or_false<S: Serializer>(
    question: &Option<Question>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match question {
        Some(question) => question.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
