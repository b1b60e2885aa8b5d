use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;
use std::sync::Arc;

use crate::metrics;
use crate::services::AppState;

pub mod categories;
pub mod questions;
pub mod quizzes;

/// Client-facing failure. Every variant renders the uniform envelope
/// `{success: false, error: <status>, message: <text>}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest,
    NotFound,
    Unprocessable,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, "bad request"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            ApiError::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
            ApiError::Internal(detail) => {
                // Internal details stay in the logs, never in the response
                tracing::error!("internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{:#}", err))
    }
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mongo_healthy = matches!(
        tokio::time::timeout(
            std::time::Duration::from_secs(1),
            state.mongo.run_command(mongodb::bson::doc! { "ping": 1 }),
        )
        .await,
        Ok(Ok(_))
    );

    let status_code = if mongo_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(json!({
            "status": if mongo_healthy { "healthy" } else { "degraded" },
            "service": "trivia-api",
            "version": env!("CARGO_PKG_VERSION"),
            "dependencies": {
                "mongodb": if mongo_healthy { "healthy" } else { "unhealthy" },
            }
        })),
    )
}

pub async fn metrics_handler() -> impl IntoResponse {
    match metrics::render_metrics() {
        Ok(metrics_text) => (StatusCode::OK, metrics_text),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render metrics: {}", e),
        ),
    }
}

/// Protects /metrics with HTTP Basic Auth. Credentials come from the
/// METRICS_AUTH env var in `username:password` form.
pub async fn metrics_auth_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let encoded = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let credentials = general_purpose::STANDARD
        .decode(encoded)
        .ok()
        .and_then(|decoded| String::from_utf8(decoded).ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let expected = std::env::var("METRICS_AUTH").unwrap_or_else(|_| "admin:changeme".to_string());
    if credentials != expected {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}
