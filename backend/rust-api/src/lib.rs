use axum::{
    http::{header, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use services::AppState;

pub fn create_router(app_state: std::sync::Arc<services::AppState>) -> Router {
    // The game frontend is served from a different origin, so CORS is open
    // for all trivia endpoints (mirrors the original deployment).
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any);

    Router::new()
        // Operational endpoints
        .route("/health", get(handlers::health_check))
        // Metrics endpoint with Basic Auth protection
        .route(
            "/metrics",
            get(handlers::metrics_handler)
                .layer(middleware::from_fn(handlers::metrics_auth_middleware)),
        )
        // Trivia endpoints
        .route("/categories", get(handlers::categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::questions::list_questions_by_category),
        )
        .route(
            "/questions",
            get(handlers::questions::list_questions)
                .post(handlers::questions::create_or_search_question),
        )
        .route(
            "/questions/{id}",
            delete(handlers::questions::delete_question),
        )
        .route("/quizzes", post(handlers::quizzes::play_quiz))
        .with_state(app_state)
        .layer(cors)
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
