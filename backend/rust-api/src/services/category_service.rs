use anyhow::{Context, Result};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::metrics::track_db_operation;
use crate::models::Category;

const CATEGORIES_COLLECTION: &str = "categories";

/// Data access for the categories collection. Categories are pre-populated
/// and read-only from this service's point of view.
pub struct CategoryService {
    categories: Collection<Category>,
}

impl CategoryService {
    pub fn new(mongo: &Database) -> Self {
        Self {
            categories: mongo.collection(CATEGORIES_COLLECTION),
        }
    }

    /// All categories, ascending by id.
    pub async fn list_all(&self) -> Result<Vec<Category>> {
        track_db_operation("find", CATEGORIES_COLLECTION, async {
            let cursor = self
                .categories
                .find(doc! {})
                .sort(doc! { "_id": 1 })
                .await
                .context("listing categories")?;
            cursor.try_collect().await.context("draining category cursor")
        })
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        track_db_operation("find_one", CATEGORIES_COLLECTION, async {
            self.categories
                .find_one(doc! { "_id": id })
                .await
                .context("fetching category by id")
        })
        .await
    }
}
