use serde::Deserialize;
use trivia_db::{QuestionFilter, TriviaStore, models::QuestionPage};

use crate::error::ApiError;

/// Number of questions returned per page
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// `?page=N` query parameters
///
/// The value is kept raw so that a missing or unparseable page falls back to
/// page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> Page {
        self.page
            .as_deref()
            .and_then(Page::parse)
            .unwrap_or_default()
    }
}

/// 1-based page number. Page 0 is accepted and always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Parse a page number, `None` unless `raw` is a non-negative integer.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }

    pub const fn number(self) -> u32 {
        self.0
    }

    pub const fn offset(self) -> i64 {
        (self.0.saturating_sub(1) as i64) * QUESTIONS_PER_PAGE
    }

    pub const fn limit(self) -> i64 {
        if self.0 == 0 { 0 } else { QUESTIONS_PER_PAGE }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// Fetch one page of the questions selected by `filter`.
pub async fn fetch_page(
    store: &dyn TriviaStore,
    filter: &QuestionFilter,
    page: Page,
) -> Result<QuestionPage, ApiError> {
    Ok(store
        .page_questions(filter, page.offset(), page.limit())
        .await?)
}

/// Like [`fetch_page`], but an empty page is a 404.
pub async fn fetch_non_empty_page(
    store: &dyn TriviaStore,
    filter: &QuestionFilter,
    page: Page,
) -> Result<QuestionPage, ApiError> {
    let result = fetch_page(store, filter, page).await?;
    if result.questions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "page {} is empty ({} matching questions)",
            page.number(),
            result.total
        )));
    }

    Ok(result)
}
