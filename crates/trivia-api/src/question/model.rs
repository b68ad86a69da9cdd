use serde::{Deserialize, Serialize};
use trivia_db::{de::LenientInt, models::Question};

use crate::{category::CategoryMap, pagination::Page};

/// Response for `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

/// Response for search and per-category listings
#[derive(Debug, Serialize)]
pub struct FilteredQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Always `null`; kept for clients that read it
    pub current_category: Option<i64>,
}

/// Body of `POST /questions/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub page: Option<LenientInt>,
}

impl SearchRequest {
    /// The search term, if one was given and is not empty
    pub fn term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }

    /// Page requested in the body; `None` when absent or not a page number
    pub fn page(&self) -> Option<Page> {
        let number = self.page.as_ref()?.as_i64()?;
        u32::try_from(number).ok().map(Page::new)
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted_question: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_term() {
        let request: SearchRequest = serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(request.term(), Some("title"));
        assert_eq!(request.page(), None);

        let request: SearchRequest =
            serde_json::from_str(r#"{"searchTerm": "", "page": 2}"#).unwrap();
        assert_eq!(request.term(), None);
        assert_eq!(request.page(), Some(Page::new(2)));

        let request: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.term(), None);
    }

    fn body_page(body: &str) -> Option<Page> {
        let request: SearchRequest = serde_json::from_str(body).unwrap();
        request.page()
    }

    #[test]
    fn test_search_request_page() {
        assert_eq!(body_page(r#"{"page": "3"}"#), Some(Page::new(3)));
        assert_eq!(body_page(r#"{"page": null}"#), None);
        assert_eq!(body_page(r#"{"page": "last"}"#), None);
        assert_eq!(body_page(r#"{"page": -1}"#), None);
    }
}
