#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use mongodb::bson::doc;
use std::sync::Arc;
use tower::ServiceExt;
use trivia_api::{config::Config, create_router, services::AppState};

/// Builds the app against the test database and reseeds the fixture data.
/// Requires a running MongoDB (see `.env.test`).
pub async fn create_test_app() -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    dotenvy::from_filename(".env.test").ok();

    let config = Config::load().expect("Failed to load test configuration");

    let mongo_client = mongodb::Client::with_uri_str(&config.mongo_uri)
        .await
        .expect("Failed to connect to test MongoDB");

    seed_test_data(&mongo_client, &config.mongo_database).await;

    let app_state = Arc::new(
        AppState::new(config, mongo_client)
            .await
            .expect("Failed to initialize test app state"),
    );

    create_router(app_state)
}

/// Resets the test database to a known state: six categories and twelve
/// questions spread over categories 1..=3 (ids 1..=12, four per category).
async fn seed_test_data(mongo_client: &mongodb::Client, db_name: &str) {
    let db = mongo_client.database(db_name);

    for name in ["questions", "categories", "counters"] {
        db.collection::<mongodb::bson::Document>(name)
            .drop()
            .await
            .ok();
    }

    let category_names = [
        "Science",
        "Art",
        "Geography",
        "History",
        "Entertainment",
        "Sports",
    ];
    let categories: Vec<_> = category_names
        .iter()
        .enumerate()
        .map(|(i, name)| doc! { "_id": (i + 1) as i64, "type": *name })
        .collect();
    db.collection("categories")
        .insert_many(categories)
        .await
        .expect("Failed to seed categories");

    let questions: Vec<_> = (1i64..=12)
        .map(|i| {
            doc! {
                "_id": i,
                "question": format!("Sample question {}", i),
                "answer": format!("Answer {}", i),
                "category": (i - 1) % 3 + 1,
                "difficulty": 2i32,
            }
        })
        .collect();
    db.collection("questions")
        .insert_many(questions)
        .await
        .expect("Failed to seed questions");

    db.collection("counters")
        .insert_one(doc! { "_id": "question_id", "seq": 12i64 })
        .await
        .expect("Failed to seed id counter");
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
