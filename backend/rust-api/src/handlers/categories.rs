use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::handlers::ApiError;
use crate::models::Category;
use crate::services::{category_service::CategoryService, AppState};

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let service = CategoryService::new(&state.mongo);
    let all_categories = service.list_all().await?;

    if all_categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": categories_map(&all_categories),
    })))
}

/// `{id: type}` map the client expects, keyed by stringified id.
pub(crate) fn categories_map(categories: &[Category]) -> serde_json::Map<String, Value> {
    categories
        .iter()
        .map(|category| (category.id.to_string(), json!(category.kind)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_map_is_keyed_by_id() {
        let categories = vec![
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
            Category {
                id: 2,
                kind: "Art".to_string(),
            },
        ];

        let map = categories_map(&categories);
        assert_eq!(map["1"], "Science");
        assert_eq!(map["2"], "Art");
        assert_eq!(map.len(), 2);
    }
}
