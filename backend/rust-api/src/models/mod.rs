use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored trivia question. `_id` comes from the monotonic counter kept in
/// the `counters` collection, so ids are stable and strictly increasing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl Question {
    /// Wire representation expected by the game client.
    pub fn format(&self) -> QuestionPayload {
        QuestionPayload {
            id: self.id,
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// A trivia category. Read-only in this service; assumed pre-populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `?page=N` query for the paginated listings. Missing page means page 1.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// Body of `POST /questions`. The endpoint is overloaded: a present
/// (non-empty) `searchTerm` selects the search branch, otherwise all four
/// creation fields are required.
#[derive(Debug, Deserialize)]
pub struct QuestionPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i64>,
}

#[derive(Debug, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
    pub category: i64,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i64>>,
}

/// The client sends the whole category object; only the id matters here.
/// Id 0 is the "all categories" sentinel.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}
