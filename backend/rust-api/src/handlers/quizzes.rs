use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

use crate::handlers::ApiError;
use crate::metrics::QUIZ_DRAWS_TOTAL;
use crate::models::QuizRequest;
use crate::services::{
    question_service::QuestionService,
    quiz::{self, QuizDraw},
    AppState,
};

/// Draws the next quiz question. The client round-trips the ids it has
/// already seen; the server keeps no session state.
pub async fn play_quiz(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<Value>, ApiError> {
    let (category, previous_questions) = match (request.quiz_category, request.previous_questions)
    {
        (Some(category), Some(previous)) => (category, previous),
        _ => return Err(ApiError::BadRequest),
    };

    let service = QuestionService::new(&state.mongo);
    let pool = if category.id == 0 {
        service.list_all().await?
    } else {
        service.list_by_category(category.id).await?
    };

    let asked: HashSet<i64> = previous_questions.into_iter().collect();

    match quiz::pick_question(&pool, &asked) {
        QuizDraw::Selected(question) => {
            QUIZ_DRAWS_TOTAL.with_label_values(&["selected"]).inc();
            Ok(Json(json!({
                "success": true,
                "question": question.format(),
            })))
        }
        QuizDraw::Exhausted => {
            QUIZ_DRAWS_TOTAL.with_label_values(&["exhausted"]).inc();
            tracing::debug!("quiz pool exhausted for category {}", category.id);
            Ok(Json(json!({ "success": true })))
        }
    }
}
