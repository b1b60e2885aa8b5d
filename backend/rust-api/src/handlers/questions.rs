use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

use crate::handlers::{categories::categories_map, ApiError};
use crate::metrics::{QUESTIONS_CREATED_TOTAL, QUESTIONS_DELETED_TOTAL};
use crate::models::{NewQuestion, PageQuery, Question, QuestionPayload, QuestionPostBody};
use crate::services::{
    category_service::CategoryService, question_service::QuestionService, AppState,
};
use crate::utils::pagination::paginate;

pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let questions = QuestionService::new(&state.mongo);
    let all_questions = questions.list_all().await?;

    if all_questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = CategoryService::new(&state.mongo).list_all().await?;

    Ok(Json(json!({
        "success": true,
        "questions": page_of(query.page, &all_questions),
        // Historical key spelling, kept for client compatibility
        "total questions": all_questions.len(),
        "categories": categories_map(&categories),
    })))
}

pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let service = QuestionService::new(&state.mongo);

    service
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("question lookup failed: {:#}", e);
            ApiError::Unprocessable
        })?
        .ok_or(ApiError::NotFound)?;

    let deleted = service.delete(id).await.map_err(|e| {
        tracing::error!("question delete failed: {:#}", e);
        ApiError::Unprocessable
    })?;
    if !deleted {
        return Err(ApiError::Unprocessable);
    }

    QUESTIONS_DELETED_TOTAL.inc();
    tracing::info!("Deleted question {}", id);

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

/// `POST /questions` either searches (when a non-empty `searchTerm` is
/// present) or creates a new question from the four required fields.
pub async fn create_or_search_question(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    Json(body): Json<QuestionPostBody>,
) -> Result<Json<Value>, ApiError> {
    let service = QuestionService::new(&state.mongo);

    if let Some(term) = body.search_term.as_deref().filter(|s| !s.is_empty()) {
        let matches = service.search(term).await?;
        if matches.is_empty() {
            return Err(ApiError::NotFound);
        }

        return Ok(Json(json!({
            "success": true,
            "questions": page_of(query.page, &matches),
            "total_questions": matches.len(),
        })));
    }

    let new_question = match (body.question, body.answer, body.difficulty, body.category) {
        (Some(question), Some(answer), Some(difficulty), Some(category)) => NewQuestion {
            question,
            answer,
            difficulty,
            category,
        },
        _ => return Err(ApiError::Unprocessable),
    };
    new_question.validate().map_err(|_| ApiError::Unprocessable)?;

    let created = service.insert(new_question).await.map_err(|e| {
        tracing::error!("question insert failed: {:#}", e);
        ApiError::Unprocessable
    })?;

    QUESTIONS_CREATED_TOTAL.inc();
    tracing::info!("Created question {}", created.id);

    let all_questions = service.list_all().await?;

    Ok(Json(json!({
        "success": true,
        "created": created.id,
        "question_created": created.question,
        "questions": page_of(query.page, &all_questions),
        "total_questions": all_questions.len(),
    })))
}

pub async fn list_questions_by_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let category = CategoryService::new(&state.mongo)
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let all_questions = QuestionService::new(&state.mongo)
        .list_by_category(id)
        .await?;

    Ok(Json(json!({
        "success": true,
        "questions": page_of(query.page, &all_questions),
        "total_questions": all_questions.len(),
        "category": category.kind,
    })))
}

fn page_of(page: u32, questions: &[Question]) -> Vec<QuestionPayload> {
    paginate(page, questions).iter().map(Question::format).collect()
}
